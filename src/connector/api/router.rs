use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AnalyzeController, ChatController};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    analyze_controller: AnalyzeController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            analyze_controller: AnalyzeController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { question } => self.chat_controller.submit(&question).await,
            Commands::Analyze { image, prompt } => {
                self.analyze_controller
                    .analyze(&image, prompt.as_deref())
                    .await
            }
            Commands::Chat => unreachable!("Chat command is handled separately in main"),
        }
    }

    pub fn chat_controller(&self) -> &ChatController<'a> {
        &self.chat_controller
    }
}
