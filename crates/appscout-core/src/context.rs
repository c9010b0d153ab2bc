use appscout_config::Config;
use appscout_ghapi_interface::{ApiService, InstallationClient};

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}

impl<'a> CoreContext<'a> {
    /// Client bound to an installation (or personal) access token.
    pub fn installation_client(&self, token: &str) -> InstallationClient<'a> {
        InstallationClient::new(self.api_service, token, self.config.api.github.page_size)
    }
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use appscout_config::Config;
    use appscout_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
            }
        }
    }
}
