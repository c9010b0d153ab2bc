use std::{io::Write, sync::Arc};

use appscout_config::Config;
use appscout_core::CoreModule;
use appscout_ghapi_interface::MockApiService;
use clap::Parser;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_env_no_version(),
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

pub(crate) async fn test_command_result(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> (crate::Result<()>, String) {
    let buf = Arc::new(RwLock::new(Vec::new()));

    let result = {
        let command_args = {
            let mut tmp_args = vec!["appscout"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => {
                CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await
            }
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    };

    let vec = buf.read().await.to_vec();
    (result, std::str::from_utf8(&vec).unwrap().to_string())
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let (result, output) = test_command_result(ctx, command_args).await;
    result.unwrap();
    output
}
