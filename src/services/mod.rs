pub mod option_resolver;
