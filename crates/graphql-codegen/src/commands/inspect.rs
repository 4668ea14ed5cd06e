use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::ast_files;
use crate::ast_files::AstFileArgs;
use crate::output_utils::TreeWriter;
use graphql_codegen_ast::AstDocument;
use graphql_codegen_ast::operation::Selection;
use graphql_codegen_ast::operation::SelectionSet;
use graphql_codegen_ast::types::TypeRef;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[command(flatten)]
    files: AstFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let scan = self.files.scan();
        let mut failures = scan.errors;

        let mut tree = TreeWriter::new();
        for loaded in ast_files::load_ast_files(scan.file_paths).await {
            match loaded.result {
                Ok(doc) => {
                    tree.line(format_args!("{}", loaded.path.display()));
                    tree.nested(|tree| write_document(tree, &doc));
                },
                Err(err) => failures.push(err),
            }
        }

        CommandResult::partial(tree.finish(), &failures)
    }
}

fn rendered(type_ref: &TypeRef) -> String {
    type_ref.render().unwrap_or_else(|err| format!("<{err}>"))
}

fn write_document(tree: &mut TreeWriter, doc: &AstDocument) {
    for op in doc.operations() {
        tree.line(format_args!(
            "{} {} (root: {})",
            op.operation_kind(),
            op.name(),
            op.root_type(),
        ));
        tree.nested(|tree| {
            for variable in op.variables() {
                tree.line(format_args!(
                    "${}: {}",
                    variable.name(),
                    rendered(variable.type_node()),
                ));
            }
            write_selection_set(tree, op.selection_set());
        });
    }

    for fragment in doc.fragments().iter() {
        tree.line(format_args!(
            "fragment {} ({})",
            fragment.name(),
            fragment.file_path(),
        ));
        tree.nested(|tree| write_selection_set(tree, fragment.selection_set()));
    }

    for type_used in doc.types_used() {
        tree.line(format_args!("{} {}", type_used.kind(), type_used.name()));
        tree.nested(|tree| {
            for field in type_used.fields().unwrap_or_default() {
                tree.line(format_args!(
                    "{}: {}",
                    field.name(),
                    rendered(field.type_node()),
                ));
            }
            for value in type_used.values().unwrap_or_default() {
                tree.line(format_args!("{}", value.name()));
            }
        });
    }
}

fn write_selection_set(tree: &mut TreeWriter, selection_set: &SelectionSet) {
    for selection in selection_set.selections() {
        match selection {
            Selection::Field(field) => {
                let args = field.args().unwrap_or_default().iter()
                    .map(|arg| format!("{}: {}", arg.name(), arg.value()))
                    .collect::<Vec<_>>();
                let args =
                    if args.is_empty() {
                        String::new()
                    } else {
                        format!("({})", args.join(", "))
                    };
                let alias =
                    if field.selected_name() != field.name() {
                        format!("{}: ", field.selected_name())
                    } else {
                        String::new()
                    };
                tree.line(format_args!(
                    "{alias}{}{args}: {}",
                    field.name(),
                    rendered(field.type_node()),
                ));
            },

            Selection::FragmentSpread(spread) =>
                tree.line(format_args!("...{}", spread.fragment_name())),

            Selection::TypeCondition(condition) =>
                tree.line(format_args!(
                    "... on {}",
                    condition.type_node().innermost_name().unwrap_or("<unnamed>"),
                )),

            Selection::BooleanCondition(condition) => {
                let directive = if condition.inverted() { "skip" } else { "include" };
                tree.line(format_args!(
                    "@{directive}(if: ${})",
                    condition.variable_name(),
                ));
            },
        }

        if let Some(nested) = selection.selection_set() {
            tree.nested(|tree| write_selection_set(tree, nested));
        }
    }
}
