use hookfeed_config::Config;
use hookfeed_database_interface::DbService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub db_service: &'a (dyn DbService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use hookfeed_config::Config;
    use hookfeed_database_memory::MemoryDb;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub db_service: MemoryDb,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::for_tests(),
                core_module: CoreModule::builder().build(),
                db_service: MemoryDb::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                db_service: &self.db_service,
            }
        }
    }
}
