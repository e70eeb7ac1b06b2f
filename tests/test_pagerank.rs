#[cfg(test)]
mod test_pagerank {
    use aiplay::pagerank::{PageRankError, PageRankOptions, crawl, rank_corpus, transition_model};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_page(dir: &Path, name: &str, links: &[&str]) {
        let items: String = links
            .iter()
            .map(|l| format!("<li><a href=\"{}\">{}</a></li>\n", l, l))
            .collect();
        let html = format!("<html><body><h1>{}</h1><ul>\n{}</ul></body></html>\n", name, items);
        fs::write(dir.join(name), html).unwrap();
    }

    fn corpus0() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "1.html", &["2.html"]);
        write_page(dir.path(), "2.html", &["1.html", "3.html"]);
        write_page(dir.path(), "3.html", &["2.html", "4.html"]);
        write_page(dir.path(), "4.html", &["2.html"]);
        fs::write(dir.path().join("notes.txt"), "<a href=\"1.html\">ignored</a>").unwrap();
        dir
    }

    const EXPECTED: [(&str, f64); 4] = [
        ("1.html", 0.21991381963681134),
        ("2.html", 0.42920898738073254),
        ("3.html", 0.21991381963681134),
        ("4.html", 0.13096337334564484),
    ];

    #[test]
    fn test_crawl_and_rank() {
        let dir = corpus0();
        let corpus = crawl(dir.path()).unwrap();
        assert_eq!(corpus.pages(), ["1.html", "2.html", "3.html", "4.html"]);

        let options = PageRankOptions {
            samples: 100_000,
            tolerance: 1e-12,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let report = rank_corpus(&corpus, &options, &mut rng).unwrap();

        assert!((report.sampling.total() - 1.0).abs() < 1e-9);
        assert!((report.iteration.total() - 1.0).abs() < 1e-9);
        for (page, rank) in EXPECTED {
            let iterated = report.iteration.get(page).unwrap();
            assert!((iterated - rank).abs() < 1e-6, "{}: {}", page, iterated);
            let sampled = report.sampling.get(page).unwrap();
            assert!((sampled - rank).abs() < 0.02, "{}: {}", page, sampled);
        }

        let text = report.render();
        assert!(text.contains("PageRank Results from Sampling (n = 100000)"));
        assert!(text.contains("PageRank Results from Iteration"));
        assert!(text.contains("  2.html: 0.4292"));
    }

    #[test]
    fn test_transition_model_from_crawled_corpus() {
        let dir = corpus0();
        let corpus = crawl(dir.path()).unwrap();
        let model = transition_model(&corpus, "1.html", 0.85).unwrap();
        assert!((model["1.html"] - 0.0375).abs() < 1e-12);
        assert!((model["2.html"] - 0.8875).abs() < 1e-12);
        assert!((model.values().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dangling_pages_spread_rank_evenly() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "a.html", &["b.html"]);
        write_page(dir.path(), "b.html", &[]);
        let corpus = crawl(dir.path()).unwrap();
        let model = transition_model(&corpus, "b.html", 0.85).unwrap();
        assert!((model["a.html"] - 0.5).abs() < 1e-12);
        assert!((model["b.html"] - 0.5).abs() < 1e-12);

        let mut rng = StdRng::seed_from_u64(7);
        let report = rank_corpus(&corpus, &PageRankOptions::default(), &mut rng).unwrap();
        assert!((report.iteration.total() - 1.0).abs() < 1e-9);
        assert!(report.iteration.get("b.html").unwrap() > report.iteration.get("a.html").unwrap());
    }

    #[test]
    fn test_directory_without_pages() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(crawl(dir.path()), Err(PageRankError::EmptyCorpus)));
    }

    #[test]
    fn test_sample_corpus_on_disk() {
        let corpus = crawl(Path::new(env!("CARGO_MANIFEST_DIR")).join("data/pagerank/corpus0")).unwrap();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.links_of("2.html").unwrap(), vec!["1.html", "3.html"]);
    }
}
