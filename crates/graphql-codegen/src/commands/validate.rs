use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::ast_files;
use crate::ast_files::AstFileArgs;
use crate::output_utils;
use graphql_codegen_ast::AstDocument;
use graphql_codegen_ast::operation::OperationDocument;
use graphql_codegen_ast::operation::Selection;
use graphql_codegen_ast::operation::SelectionSet;
use graphql_codegen_ast::types::TypeRef;
use std::path::Path;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    files: AstFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let scan = self.files.scan();
        let mut errors = scan.errors;

        let mut num_files = 0;
        let mut num_operations = 0;
        let mut num_fragments = 0;
        let mut num_types = 0;
        for loaded in ast_files::load_ast_files(scan.file_paths).await {
            num_files += 1;
            match loaded.result {
                Ok(doc) => {
                    num_operations += doc.operations().len();
                    num_fragments += doc.fragments().len();
                    num_types += doc.types_used().len();
                    errors.extend(validate_document(&loaded.path, &doc));
                },
                Err(err) => errors.push(err),
            }
        }

        if !errors.is_empty() {
            return CommandResult::failure(format_args!(
                "{}",
                output_utils::format_failures(&errors),
            ));
        }

        CommandResult::success(format_args!(
            concat!(
                "{} All AST payloads validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-AST files.\n",
                "  * Validated {} operations.\n",
                "  * Validated {} fragments.\n",
                "  * Validated {} used types.",
            ),
            output_utils::GREEN_CHECK,
            num_files,
            scan.num_skipped_files,
            num_operations,
            num_fragments,
            num_types,
        ))
    }
}

/// Checks the parts of a decoded document that are only verified lazily:
/// type references must render and by-name references must resolve.
fn validate_document(path: &Path, doc: &AstDocument) -> Vec<anyhow::Error> {
    let mut validator = DocumentValidator {
        doc,
        errors: vec![],
        path,
    };

    for op in doc.operations() {
        let location = format!("operation `{}`", op.name());
        for variable in op.variables() {
            validator.check_type_ref(
                &location,
                &format!("variable `${}`", variable.name()),
                variable.type_node(),
            );
        }
        validator.check_selection_set(&location, Some(op), op.selection_set());
    }

    for fragment in doc.fragments().iter() {
        let location = format!("fragment `{}`", fragment.name());
        // Variables are declared by the operations that spread a fragment,
        // so boolean conditions inside fragments are not checked here.
        validator.check_selection_set(&location, None, fragment.selection_set());
    }

    for type_used in doc.types_used() {
        let location = format!("type `{}`", type_used.name());
        for field in type_used.fields().unwrap_or_default() {
            validator.check_type_ref(
                &location,
                &format!("field `{}`", field.name()),
                field.type_node(),
            );
        }
    }

    validator.errors
}

struct DocumentValidator<'a> {
    doc: &'a AstDocument,
    errors: Vec<anyhow::Error>,
    path: &'a Path,
}
impl DocumentValidator<'_> {
    fn check_selection_set(
        &mut self,
        location: &str,
        operation: Option<&OperationDocument>,
        selection_set: &SelectionSet,
    ) {
        let doc = self.doc;
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    let what = format!("field `{}`", field.selected_name());
                    self.check_type_ref(location, &what, field.type_node());
                    for arg in field.args().unwrap_or_default() {
                        self.check_type_ref(
                            location,
                            &format!("argument `{}` of {what}", arg.name()),
                            arg.type_node(),
                        );
                    }
                },

                Selection::FragmentSpread(spread) => {
                    if let Err(err) = spread.fragment(doc.fragments()) {
                        self.error(location, format_args!(
                            "spread of `{}`: {err}",
                            spread.fragment_name(),
                        ));
                    }
                },

                Selection::TypeCondition(condition) => self.check_type_ref(
                    location,
                    "inline fragment type condition",
                    condition.type_node(),
                ),

                Selection::BooleanCondition(condition) => {
                    if let Some(operation) = operation
                        && let Err(err) = condition.variable(operation) {
                        self.error(location, format_args!(
                            "condition on `${}`: {err}",
                            condition.variable_name(),
                        ));
                    }
                },
            }

            if let Some(nested) = selection.selection_set() {
                self.check_selection_set(location, operation, nested);
            }
        }
    }

    fn check_type_ref(&mut self, location: &str, what: &str, type_ref: &TypeRef) {
        if let Err(err) = type_ref.render() {
            self.error(location, format_args!("type of {what} (`{type_ref}`): {err}"));
        }
    }

    fn error(&mut self, location: &str, fmt_args: std::fmt::Arguments<'_>) {
        log::debug!("Validation error in {}: {location}: {fmt_args}", self.path.display());
        self.errors.push(anyhow::anyhow!(
            "{}: {location}: {fmt_args}",
            self.path.display(),
        ));
    }
}
