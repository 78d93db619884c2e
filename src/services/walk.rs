use std::path::Path;
use walkdir::WalkDir;

/// What the walk should do after a directory has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDecision {
    Continue,
    SkipSubtree,
}

/// Renders a relative path as `/a/b`, the form used by deletion uris.
/// The root itself is `""`. Only for comparison and display: names that are
/// not UTF-8 are rendered lossily and must not be used to build paths.
pub fn relative_uri(rel: &Path) -> String {
    let mut out = String::new();
    for part in rel.components() {
        out.push('/');
        out.push_str(&part.as_os_str().to_string_lossy());
    }
    out
}

/// Depth-first walk over the directories below `root`, in file-name order.
///
/// `visit` gets each directory's path relative to `root` together with its
/// uri and decides whether to descend. An `Err` from `visit` aborts the walk
/// and is returned as-is; walk failures are converted through `on_walk_error`.
pub fn walk_dirs<E, F, W>(root: &Path, mut visit: F, on_walk_error: W) -> Result<(), E>
where
    F: FnMut(&Path, &str) -> Result<WalkDecision, E>,
    W: Fn(walkdir::Error) -> E,
{
    let mut it = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = it.next() {
        let entry = entry.map_err(&on_walk_error)?;
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        if visit(rel, &relative_uri(rel))? == WalkDecision::SkipSubtree {
            it.skip_current_dir();
        }
    }
    Ok(())
}
