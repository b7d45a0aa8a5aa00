use std::sync::Arc;

use crate::adapters::{SystemRunner, WhichLocator};
use crate::app::pipeline_interactor::PipelineInteractor;
use crate::domain::model::PipelineConfig;
use crate::ports::{ProcessRunner, ToolLocator};

pub trait AppContainer {
    fn pipeline_interactor(&self) -> Arc<PipelineInteractor>;
}

/// Wires the pipeline to the real filesystem and process adapters
pub struct DefaultAppContainer {
    pipeline_interactor: Arc<PipelineInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: PipelineConfig) -> Self {
        let locator = Arc::new(WhichLocator::from_config(&config));
        let runner = Arc::new(SystemRunner::new());

        let pipeline_interactor = Arc::new(PipelineInteractor::new(
            config,
            locator as Arc<dyn ToolLocator>,
            runner as Arc<dyn ProcessRunner>,
        ));

        Self {
            pipeline_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn pipeline_interactor(&self) -> Arc<PipelineInteractor> {
        Arc::clone(&self.pipeline_interactor)
    }
}
