mod fragment_registry_builder_tests;
mod selection_tests;
