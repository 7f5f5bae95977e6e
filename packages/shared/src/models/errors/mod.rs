pub mod model_errors;
