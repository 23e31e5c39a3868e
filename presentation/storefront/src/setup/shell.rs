use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use business::application::session::StorefrontSession;
use business::domain::logger::Logger;
use business::domain::order::model::OrderOutcome;
use business::domain::order::use_cases::place::PlaceOrderUseCase;
use business::domain::user_data::model::UserField;

use crate::setup::dependency_injection::Screens;
use crate::views::surface::{Gesture, Surface};

const HELP: &str = "\
Commands:
  list              show the catalog
  show N            open product card N
  add N             add product N to the cart
  drop N            remove product N from the cart
  remove N          remove row N of the cart
  set FIELD VALUE   fill address, delivery_method, email or phone
  submit            place the order
  cart | form       show the cart or the order form
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(usize),
    Add(usize),
    Drop(usize),
    Remove(usize),
    Set(UserField, String),
    Submit,
    Cart,
    Form,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("command.empty")]
    Empty,
    #[error("command.unknown: {0}")]
    Unknown(String),
    #[error("command.missing_argument")]
    MissingArgument,
    #[error("command.invalid_index: {0}")]
    InvalidIndex(String),
    #[error("command.invalid_field: {0}")]
    InvalidField(String),
    #[error("command.no_such_card: {0}")]
    NoSuchCard(usize),
}

/// Parses a 1-based position.
fn parse_index(arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument)?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidIndex(arg.to_string())),
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let arg = Some(rest).filter(|r| !r.is_empty());

        match verb {
            "" => Err(CommandError::Empty),
            "list" => Ok(Command::List),
            "show" => parse_index(arg).map(Command::Show),
            "add" => parse_index(arg).map(Command::Add),
            "drop" => parse_index(arg).map(Command::Drop),
            "remove" => parse_index(arg).map(Command::Remove),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::MissingArgument)?;
                let field = field
                    .parse::<UserField>()
                    .map_err(|_| CommandError::InvalidField(field.to_string()))?;
                Ok(Command::Set(field, value.trim().to_string()))
            }
            "submit" => Ok(Command::Submit),
            "cart" => Ok(Command::Cart),
            "form" => Ok(Command::Form),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// The surface and gesture a command stands for, if it is a user gesture.
pub fn gesture_for(
    command: &Command,
    screens: &Screens,
) -> Result<Option<(Surface, Gesture)>, CommandError> {
    let card = |n: usize| {
        screens
            .cards
            .get(n - 1)
            .cloned()
            .ok_or(CommandError::NoSuchCard(n))
    };

    let target = match command {
        Command::Show(n) => Some((card(*n)?, Gesture::Click)),
        Command::Add(n) => Some((card(*n)?, Gesture::AddToCart)),
        Command::Drop(n) => Some((card(*n)?, Gesture::RemoveFromCart)),
        Command::Remove(n) => Some((screens.cart.clone(), Gesture::RemoveAt(n - 1))),
        Command::Set(field, value) => Some((
            screens.form.clone(),
            Gesture::Input {
                field: *field,
                value: value.clone(),
            },
        )),
        Command::Submit => Some((screens.form.clone(), Gesture::Submit)),
        _ => None,
    };
    Ok(target)
}

/// Line-based host: turns commands into gestures on the session's surfaces and
/// places orders the session hands back.
pub struct Shell {
    session: StorefrontSession,
    screens: Screens,
    place_order: Arc<dyn PlaceOrderUseCase>,
    logger: Arc<dyn Logger>,
}

impl Shell {
    pub fn new(
        session: StorefrontSession,
        screens: Screens,
        place_order: Arc<dyn PlaceOrderUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            session,
            screens,
            place_order,
            logger,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        self.session.init();
        Self::show(&self.screens.catalog);
        println!("{}", HELP);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(e) = self.execute(command).await {
                        println!("{}", e);
                    }
                }
                Err(CommandError::Empty) => {}
                Err(e) => println!("{}", e),
            }
        }

        self.logger.info("Storefront session closed");
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        if let Some((surface, gesture)) = gesture_for(&command, &self.screens)? {
            surface.dispatch(&gesture);
            self.settle().await;
        }

        match command {
            Command::List => Self::show(&self.screens.catalog),
            Command::Show(n) => Self::show(&self.screens.cards[n - 1]),
            Command::Add(_) | Command::Drop(_) | Command::Remove(_) | Command::Cart => {
                Self::show(&self.screens.cart)
            }
            Command::Set(..) | Command::Form => Self::show(&self.screens.form),
            Command::Submit => {
                Self::show(&self.screens.form);
                Self::show(&self.screens.cart);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => {}
        }
        Ok(())
    }

    /// Pumps the session and places every order it hands back.
    async fn settle(&mut self) {
        while let Some(order) = self.session.pump() {
            let outcome = match self.place_order.execute(order).await {
                Ok(outcome) => outcome,
                Err(e) => OrderOutcome::Rejected(e.to_string()),
            };
            self.session.complete_order(&outcome);
        }
    }

    fn show(surface: &Surface) {
        println!("== {} ==\n{}", surface.name(), surface.content());
    }
}
