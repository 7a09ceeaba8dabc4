use crate::error::StoreResult;
use crate::utils::app_config::AppConfig;

pub trait ActionProcessor<Output> {
    fn process(&self, app_config: &AppConfig) -> StoreResult<Output>;
}
