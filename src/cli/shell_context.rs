use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::{
        services::TransactionQuery,
        utils::PathResolver,
        validation::{AuthForm, TransactionForm},
        Store, SystemClock,
    },
    domain::TransactionKind,
    errors::TrackerError,
    storage::{JsonFileStore, KeyValueStore, PersistenceAdapter},
};

use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: Store,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Filter and sort used by the transaction history screen.
    pub query: TransactionQuery,
    /// Pending add-transaction input, kept until the store accepts it.
    pub transaction_form: TransactionForm,
    pub auth_form: AuthForm,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, TrackerError> {
        let base = PathResolver::base_dir();
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = config_manager.load()?;
        let backend = JsonFileStore::new(Some(base))?;
        Ok(Self::assemble(mode, config_manager, config, Box::new(backend)))
    }

    #[cfg(test)]
    pub(crate) fn for_tests(
        base: std::path::PathBuf,
        backend: crate::storage::MemoryStore,
    ) -> Result<Self, TrackerError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;
        Ok(Self::assemble(
            CliMode::Script,
            config_manager,
            config,
            Box::new(backend),
        ))
    }

    fn assemble(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        backend: Box<dyn KeyValueStore>,
    ) -> Self {
        let persistence = PersistenceAdapter::new(backend, config.seed_policy());
        let store = Store::open(persistence, Box::new(SystemClock));

        let auth_form = AuthForm::new(store.state().auth_mode);

        let mut registry = CommandRegistry::new();
        super::commands::register_all(&mut registry);

        let context = Self {
            mode,
            registry,
            store,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            query: TransactionQuery::default(),
            transaction_form: TransactionForm::new(TransactionKind::Expense),
            auth_form,
            running: true,
        };
        context.sync_output();
        context
    }

    /// Pushes the current theme and mode into the output helpers.
    pub(crate) fn sync_output(&self) {
        output::set_preferences(OutputPreferences {
            theme: self.store.state().theme,
            plain: self.mode == CliMode::Script,
        });
    }

    pub fn prompt(&self) -> String {
        let state = self.store.state();
        match &state.current_user {
            Some(user) => format!("expense-tracker({} @ {})> ", user.name, state.current_view),
            None => format!("expense-tracker({})> ", state.current_view),
        }
    }
}
