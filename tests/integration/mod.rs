//! Integration test modules

mod deploy_pipeline;
mod logging_env;
mod store_subscription;
