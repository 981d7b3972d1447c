use std::fs;
use std::path::PathBuf;

static HOST_LAYERS: [&str; 4] = [
    "crate::widgets",
    "crate::runtime",
    "crate::platform",
    "crate::config",
];

/// Every `.rs` file below `root`, depth-first, in a stable order.
fn rust_sources(root: PathBuf) -> Vec<PathBuf> {
    let mut pending = vec![root];
    let mut sources = Vec::new();
    while let Some(dir) = pending.pop() {
        let listing = fs::read_dir(&dir).unwrap_or_else(|err| panic!("listing {}: {err}", dir.display()));
        for path in listing.filter_map(Result::ok).map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                sources.push(path);
            }
        }
    }
    sources.sort();
    sources
}

#[test]
fn core_does_not_depend_on_host_layers() {
    let core_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/core");
    let sources = rust_sources(core_dir.clone());
    assert!(!sources.is_empty(), "no sources under {}", core_dir.display());

    let violations: Vec<String> = sources
        .iter()
        .flat_map(|path| {
            let contents =
                fs::read_to_string(path).unwrap_or_else(|err| panic!("reading {}: {err}", path.display()));
            let relative = path.strip_prefix(&core_dir).unwrap_or(path).display().to_string();
            HOST_LAYERS
                .iter()
                .filter(move |layer| contents.contains(*layer))
                .map(move |layer| format!("core/{relative} -> {layer}"))
        })
        .collect();

    assert!(
        violations.is_empty(),
        "the fitter and measurers must stay host-independent:\n{}",
        violations.join("\n")
    );
}
