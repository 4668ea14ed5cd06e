use anyhow::Context as _;
use graphql_codegen_ast::AstDocument;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every subcommand that reads AST payload files.
#[derive(Debug, clap::Args)]
pub(crate) struct AstFileArgs {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for AST \
             payload files within a directory.",
        long,
        value_delimiter = ',',
    )]
    ast_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more AST payload files or directories \
             containing AST payload files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub(crate) struct AstFileScan {
    pub errors: Vec<anyhow::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

#[derive(Debug)]
pub(crate) struct LoadedAstFile {
    pub path: PathBuf,
    pub result: anyhow::Result<AstDocument>,
}

impl AstFileArgs {
    /// Finds all AST payload files recursively located at or under each path
    /// passed as an arg.
    pub fn scan(&self) -> AstFileScan {
        let ast_file_exts: HashSet<&str> =
            self.ast_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut scan = AstFileScan::default();
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        scan.errors.push(err.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let matches_ext =
                    entry_path.extension()
                        .map(|ext| ext.to_string_lossy())
                        .is_some_and(|ext| ast_file_exts.contains(&*ext));
                if !matches_ext {
                    log::trace!("Skipping file with unrecognized extension: {entry_path:#?}.");
                    scan.num_skipped_files += 1;
                    continue
                }

                log::trace!("Found AST file at {entry_path:#?}.");
                match std::fs::canonicalize(entry_path) {
                    Ok(canonical_path) => scan.file_paths.push(canonical_path),
                    Err(err) => scan.errors.push(anyhow::Error::new(err).context(
                        format!("Failed to resolve {}", entry_path.display()),
                    )),
                }
            }
        }

        // A single file path argument is loaded as an AST payload even if its
        // extension is not one of `--ast-file-exts`.
        if scan.file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file()
            && let Ok(canonical_path) = std::fs::canonicalize(first_arg_path) {
            log::warn!(
                "Proceeding to load {canonical_path:#?} even though it doesn't \
                match any of the --ast-file-exts ({}).",
                self.ast_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            scan.num_skipped_files = scan.num_skipped_files.saturating_sub(1);
            scan.file_paths.push(canonical_path);
        }

        log::debug!("Found {} AST files.", scan.file_paths.len());
        scan
    }
}

/// Decodes every file on the blocking thread pool. Results are returned in
/// the order of `file_paths`.
pub(crate) async fn load_ast_files(file_paths: Vec<PathBuf>) -> Vec<LoadedAstFile> {
    let tasks: Vec<_> =
        file_paths.into_iter()
            .map(|path| {
                let task_path = path.clone();
                let task = tokio::task::spawn_blocking(
                    move || load_ast_file(&task_path),
                );
                (path, task)
            })
            .collect();

    let mut loaded = Vec::with_capacity(tasks.len());
    for (path, task) in tasks {
        let result = match task.await {
            Ok(result) => result,
            Err(join_err) => Err(anyhow::Error::new(join_err).context(
                format!("Failed to load {}", path.display()),
            )),
        };
        loaded.push(LoadedAstFile { path, result });
    }
    loaded
}

fn load_ast_file(path: &std::path::Path) -> anyhow::Result<AstDocument> {
    let file =
        std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    let doc =
        AstDocument::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Failed to decode {}", path.display()))?;
    log::debug!(
        "Loaded {} operation(s) from {}.",
        doc.operations().len(),
        path.display(),
    );
    Ok(doc)
}
