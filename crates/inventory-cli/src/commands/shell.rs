//! `inventory shell`: interactive session.
//!
//! A menu loop standing in for the inventory window: the list model and
//! selection live in the [`TerminalView`], the five input fields in an
//! [`ItemForm`], and every store operation runs on the [`Dispatcher`]
//! worker.
//!
//! [`TerminalView`]: crate::view::TerminalView
//! [`ItemForm`]: inventory_core::domain::ItemForm
//! [`Dispatcher`]: inventory_adapters::Dispatcher

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

#[cfg(feature = "interactive")]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    session::run(config, output)
}

#[cfg(not(feature = "interactive"))]
pub fn execute(_config: AppConfig, _output: OutputManager) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
mod session {
    use std::sync::Arc;

    use dialoguer::{FuzzySelect, Input, Select, theme::ColorfulTheme};
    use inventory_adapters::{Dispatcher, InventoryCommand};
    use inventory_core::domain::{Item, ItemForm};
    use tracing::{debug, info, instrument};

    use crate::{
        commands::Session,
        config::AppConfig,
        error::{CliError, CliResult},
        output::OutputManager,
        view::{TerminalView, ViewMode},
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Refresh,
        Add,
        Select,
        UpdateSelected,
        DeleteSelected,
        Clear,
        Quit,
    }

    impl Action {
        const MENU: [Action; 7] = [
            Action::Refresh,
            Action::Add,
            Action::Select,
            Action::UpdateSelected,
            Action::DeleteSelected,
            Action::Clear,
            Action::Quit,
        ];

        fn label(self) -> &'static str {
            match self {
                Action::Refresh => "Refresh list",
                Action::Add => "Add item",
                Action::Select => "Select item",
                Action::UpdateSelected => "Update selected",
                Action::DeleteSelected => "Delete selected",
                Action::Clear => "Clear form",
                Action::Quit => "Quit",
            }
        }
    }

    struct Shell {
        dispatcher: Dispatcher,
        view: TerminalView,
        output: Arc<OutputManager>,
        form: ItemForm,
        theme: ColorfulTheme,
    }

    #[instrument(skip_all)]
    pub(super) fn run(config: AppConfig, output: OutputManager) -> CliResult<()> {
        let output = Arc::new(output);
        let Session { controller, view } =
            Session::open_shared(&config, Arc::clone(&output), ViewMode::Interactive)?;
        let dispatcher = Dispatcher::new(Arc::new(controller))?;

        if config.startup.skip_initial_load {
            debug!("Initial load skipped");
        } else {
            dispatcher
                .load_initial_items(config.startup.load_errors)
                .wait()?;
        }

        let mut shell = Shell {
            dispatcher,
            view,
            output,
            form: ItemForm::default(),
            theme: ColorfulTheme::default(),
        };
        shell.run_loop()?;

        shell.dispatcher.shutdown();
        info!("Shell closed");
        Ok(())
    }

    impl Shell {
        fn run_loop(&mut self) -> CliResult<()> {
            loop {
                let labels: Vec<_> = Action::MENU.iter().map(|a| a.label()).collect();
                let choice = Select::with_theme(&self.theme)
                    .with_prompt("Inventory")
                    .items(&labels)
                    .default(0)
                    .interact_opt()
                    .map_err(prompt_error)?;

                let action = choice.map_or(Action::Quit, |index| Action::MENU[index]);
                debug!(?action, "menu");

                match action {
                    Action::Refresh => self.submit(InventoryCommand::List)?,
                    Action::Add => self.add()?,
                    Action::Select => self.select()?,
                    Action::UpdateSelected => self.update_selected()?,
                    Action::DeleteSelected => self.delete_selected()?,
                    Action::Clear => {
                        self.form.clear();
                        self.view.clear_selection();
                    }
                    Action::Quit => return Ok(()),
                }
            }
        }

        fn add(&mut self) -> CliResult<()> {
            self.edit_form()?;
            if let Some(item) = self.parse_form()? {
                self.submit(InventoryCommand::Add(item))?;
            }
            Ok(())
        }

        fn select(&mut self) -> CliResult<()> {
            let items = self.view.items();
            if items.is_empty() {
                self.output.warning("Nothing to select, the list is empty")?;
                return Ok(());
            }

            let lines: Vec<_> = items.iter().map(|item| item.display_line()).collect();
            let picked = FuzzySelect::with_theme(&self.theme)
                .with_prompt("Select item")
                .items(&lines)
                .interact_opt()
                .map_err(prompt_error)?;

            if let Some(item) = picked.and_then(|index| items.get(index)) {
                self.view.select(item.id());
                self.form = ItemForm::from_item(item);
            }
            Ok(())
        }

        fn update_selected(&mut self) -> CliResult<()> {
            if self.view.selected().is_none() {
                self.output.warning("Select an item first")?;
                return Ok(());
            }
            self.edit_form()?;
            if let Some(item) = self.parse_form()? {
                self.submit(InventoryCommand::Update(item))?;
            }
            Ok(())
        }

        fn delete_selected(&mut self) -> CliResult<()> {
            let Some(item) = self.view.selected() else {
                self.output.warning("Select an item first")?;
                return Ok(());
            };
            self.submit(InventoryCommand::Delete(item))?;
            self.form.clear();
            Ok(())
        }

        /// Prompt for each field, pre-filled with what the form holds.
        fn edit_form(&mut self) -> CliResult<()> {
            let ItemForm {
                id,
                name,
                quantity,
                price,
                description,
            } = &mut self.form;

            for (label, value) in [
                ("Id", id),
                ("Name", name),
                ("Quantity", quantity),
                ("Price", price),
                ("Description", description),
            ] {
                *value = Input::<String>::with_theme(&self.theme)
                    .with_prompt(label)
                    .with_initial_text(value.as_str())
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
            }
            Ok(())
        }

        /// Blank or malformed input never reaches the dispatcher.
        fn parse_form(&self) -> CliResult<Option<Item>> {
            if !self.form.is_complete() {
                self.output.warning("Fill in every field first")?;
                return Ok(None);
            }
            match self.form.parse() {
                Ok(item) => Ok(Some(item)),
                Err(e) => {
                    self.output.error(&e.to_string())?;
                    Ok(None)
                }
            }
        }

        /// Run a command and wait for it so output stays in menu order.
        ///
        /// Storage failures are shown and the session carries on.
        fn submit(&self, command: InventoryCommand) -> CliResult<()> {
            match self.dispatcher.submit(command).wait() {
                Ok(()) => Ok(()),
                Err(e) => {
                    let err = CliError::Core(e);
                    err.log();
                    self.output.error(&err.to_string())?;
                    for suggestion in err.suggestions() {
                        self.output.info(&suggestion)?;
                    }
                    Ok(())
                }
            }
        }
    }

    fn prompt_error(error: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "terminal prompt failed".into(),
            source: std::io::Error::other(error.to_string()),
        }
    }

}
