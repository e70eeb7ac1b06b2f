#[cfg(test)]
mod test_heredity {
    use aiplay::heredity::{
        HeredityError, ModelParameters, Posteriors, TraitRow, infer, load_population,
        load_population_from_path, render_json, render_report,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn assert_genes(posteriors: &Posteriors, name: &str, expected: [f64; 3]) {
        let person = posteriors.get(name).unwrap();
        assert_close(person.gene.zero, expected[0]);
        assert_close(person.gene.one, expected[1]);
        assert_close(person.gene.two, expected[2]);
    }

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_family0_posteriors() {
        let file = csv_file("name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\nLily,,,0\n");
        let population = load_population_from_path(file.path()).unwrap();
        let posteriors = infer(&population, &ModelParameters::default()).unwrap();

        assert_genes(
            &posteriors,
            "Harry",
            [0.5351186101461486, 0.45569827010782393, 0.009183119746027276],
        );
        assert_genes(
            &posteriors,
            "James",
            [0.2917933130699087, 0.5106382978723406, 0.19756838905775076],
        );
        assert_genes(
            &posteriors,
            "Lily",
            [0.9827318788129458, 0.013649053872402023, 0.003619067314652051],
        );
        assert_close(posteriors.get("Harry").unwrap().has_trait.present, 0.26651124519676067);
        assert_eq!(posteriors.get("James").unwrap().has_trait.present, 1.0);
        assert_eq!(posteriors.get("Lily").unwrap().has_trait.absent, 1.0);
    }

    #[test]
    fn test_child_of_unaffected_parents() {
        let csv = "name,mother,father,trait\nHarry,Lily,James,\nJames,,,0\nLily,,,0\n";
        let population = load_population(csv.as_bytes()).unwrap();
        let posteriors = infer(&population, &ModelParameters::default()).unwrap();

        assert_genes(
            &posteriors,
            "Harry",
            [0.9599399992575506, 0.03965055675322709, 0.00040944398922246393],
        );
        assert_close(posteriors.get("Harry").unwrap().has_trait.present, 0.03206985036737729);
        for parent in ["Lily", "James"] {
            assert_genes(
                &posteriors,
                parent,
                [0.982731878812946, 0.013649053872402036, 0.0036190673146520537],
            );
        }
    }

    #[test]
    fn test_unrelated_affected_founders() {
        let csv = "name,mother,father,trait\nA,,,1\nB,,,1\n";
        let population = load_population(csv.as_bytes()).unwrap();
        let posteriors = infer(&population, &ModelParameters::default()).unwrap();

        // Independent founders: prior times P(trait | genes), renormalized.
        let weights = [0.96 * 0.01, 0.03 * 0.56, 0.01 * 0.65];
        let total: f64 = weights.iter().sum();
        let expected = weights.map(|w| w / total);
        assert_genes(&posteriors, "A", expected);
        assert_genes(&posteriors, "B", expected);
    }

    #[test]
    fn test_every_distribution_sums_to_one() {
        let csv = "name,mother,father,trait\nArthur,,,0\nCharlie,Molly,Arthur,0\nFred,Molly,Arthur,1\nGinny,Molly,Arthur,\nMolly,,,\nRon,Molly,Arthur,\n";
        let population = load_population(csv.as_bytes()).unwrap();
        let posteriors = infer(&population, &ModelParameters::default()).unwrap();

        assert_eq!(posteriors.people.len(), 6);
        for person in posteriors.iter() {
            assert_close(person.gene.total(), 1.0);
            assert_close(person.has_trait.total(), 1.0);
        }
        // Ginny and Ron are exchangeable.
        let ginny = posteriors.get("Ginny").unwrap();
        let ron = posteriors.get("Ron").unwrap();
        assert_close(ginny.gene.one, ron.gene.one);
        assert_close(ginny.has_trait.present, ron.has_trait.present);
    }

    #[test]
    fn test_parameters_from_json_file() {
        let mut params = ModelParameters::default();
        params.gene = [1.0, 0.0, 0.0];
        params.mutation = 0.0;
        let file = NamedTempFile::new().unwrap();
        params.save_to_file(file.path()).unwrap();

        let loaded = ModelParameters::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, params);

        let csv = "name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\nLily,,,0\n";
        let population = load_population(csv.as_bytes()).unwrap();
        let posteriors = infer(&population, &loaded).unwrap();
        let harry = posteriors.get("Harry").unwrap();
        assert_eq!(harry.gene.zero, 1.0);
        assert_close(harry.has_trait.present, 0.01);
    }

    #[test]
    fn test_invalid_parameter_file_is_rejected() {
        let file = csv_file(
            r#"{"gene":[0.5,0.5,0.5],"trait_given_gene":[{"present":0.01,"absent":0.99},{"present":0.56,"absent":0.44},{"present":0.65,"absent":0.35}],"mutation":0.01}"#,
        );
        assert!(matches!(
            ModelParameters::load_from_file(file.path()),
            Err(HeredityError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_evidence_the_model_cannot_produce() {
        let mut params = ModelParameters::default();
        params.trait_given_gene = [TraitRow { present: 0.0, absent: 1.0 }; 3];
        let csv = "name,mother,father,trait\nLily,,,1\n";
        let population = load_population(csv.as_bytes()).unwrap();
        assert!(matches!(
            infer(&population, &params),
            Err(HeredityError::ImpossibleEvidence(_))
        ));
    }

    #[test]
    fn test_reports() {
        let csv = "name,mother,father,trait\nLily,,,\n";
        let population = load_population(csv.as_bytes()).unwrap();
        let posteriors = infer(&population, &ModelParameters::default()).unwrap();

        let text = render_report(&posteriors);
        assert!(text.starts_with("Lily:\n  Gene:\n    2: 0.0100\n    1: 0.0300\n    0: 0.9600\n"));
        assert!(text.contains("    True: 0.0329\n"));

        let json: serde_json::Value = serde_json::from_str(&render_json(&posteriors).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "Lily");
        assert!((json[0]["gene"]["zero"].as_f64().unwrap() - 0.96).abs() < TOLERANCE);
        assert!((json[0]["trait"]["present"].as_f64().unwrap() - 0.0329).abs() < TOLERANCE);
    }
}
