use std::sync::Arc;

use console::style;
use switch_display::{ProfileList, StatusView};
use switch_domain::{AddProfile, SwitchConfig};
use switch_services::{Confirm, DeleteOutcome, InitOutcome, ProfileSwitcher};

use crate::cli::Command;

pub struct UI<C> {
    config: Arc<SwitchConfig>,
    switcher: ProfileSwitcher<C>,
}

impl<C: Confirm> UI<C> {
    pub fn new(config: SwitchConfig, confirm: C) -> Self {
        let config = Arc::new(config);
        Self { switcher: ProfileSwitcher::new(config.clone(), confirm), config }
    }

    pub fn run(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Init => self.on_init(),
            Command::Use { name } => {
                self.switcher.use_profile(&name)?;
                println!("Switched to profile {}", style(&name).green().bold());
                Ok(())
            }
            Command::Add(args) => {
                let name = args.name.clone();
                let activate = args.activate;
                self.switcher.add(&name, &AddProfile::from(args), activate)?;
                println!("Added profile {}", style(&name).green().bold());
                if activate {
                    println!("Switched to profile {}", style(&name).green().bold());
                }
                Ok(())
            }
            Command::Delete { name, force } => {
                match self.switcher.delete(&name, force)? {
                    DeleteOutcome::Deleted => println!("Deleted profile {}", style(&name).bold()),
                    DeleteOutcome::Cancelled => println!("Cancelled"),
                }
                Ok(())
            }
            Command::Show => {
                let (settings, catalog) = self.switcher.snapshot()?;
                print!("{}", StatusView::new(&settings, &catalog));
                Ok(())
            }
            Command::List => {
                let (settings, catalog) = self.switcher.snapshot()?;
                print!("{}", ProfileList::new(&settings, &catalog));
                Ok(())
            }
        }
    }

    fn on_init(&self) -> anyhow::Result<()> {
        let path = self.config.profiles_path.display();
        match self.switcher.init()? {
            InitOutcome::Created => {
                println!("Created {path} with profile {}", style("default").green().bold())
            }
            InitOutcome::AlreadyExists => {
                eprintln!("{} {path} already exists, nothing to do", style("Note:").yellow())
            }
        }
        Ok(())
    }
}
