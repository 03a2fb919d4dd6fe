//! Interactive text menu.
//!
//! The session reads answers line by line from any `BufRead` and writes
//! prompts and results to any `Write`, so it runs the same against a terminal
//! or an in-memory script. End of input ends the session.

mod menu;

pub use menu::MenuChoice;

use crate::config::Config;
use crate::domain::{
    AddressValidator, BirthdayValidator, Clock, EmailValidator, FieldValidator, NameValidator,
    ValidationError,
};
use crate::models::Record;
use crate::AddressBook;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Answer that backs out of the add-contact flow.
const CANCEL: &str = "0";

/// One interactive session over an address book.
pub struct Session<R, W> {
    input: R,
    output: W,
    book: AddressBook,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, book: AddressBook, config: Config) -> Self {
        Self {
            input,
            output,
            book,
            config,
        }
    }

    /// Consume the session, returning the book in its final state.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Show the menu and dispatch choices until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.ask("Enter your choice (1/2/3/4/5/6/7/8/9): ")? else {
                return Ok(());
            };

            let Some(choice) = MenuChoice::from_input(&choice) else {
                self.say("Invalid choice. Please enter a valid choice (1/2/3/4/5/6/7/8/9)")?;
                continue;
            };

            tracing::debug!(?choice, "Menu choice");
            let keep_going = match choice {
                MenuChoice::Add => self.add_contact()?,
                MenuChoice::Edit => self.edit_contact()?,
                MenuChoice::Delete => self.delete_contact()?,
                MenuChoice::List => self.list_contacts()?,
                MenuChoice::Save => self.save_book()?,
                MenuChoice::Load => self.load_book()?,
                MenuChoice::Search => self.search_contacts()?,
                MenuChoice::Birthdays => self.upcoming_birthdays()?,
                MenuChoice::Exit => {
                    self.say("Exiting the Address Book program. Goodbye!")?;
                    return Ok(());
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.say("Address Book Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "  {}. {}", choice.key(), choice.description())?;
        }
        Ok(())
    }

    /// Each handler returns `Ok(false)` when input ran out mid-flow.
    fn add_contact(&mut self) -> io::Result<bool> {
        let clock = self.book.clock_handle();
        loop {
            self.say("Enter contact details (or enter '0' to exit):")?;
            let mut answers = Vec::with_capacity(5);
            for prompt in [
                "Enter the contact's name: ",
                "Enter the contact's address: ",
                "Enter the contact's phone number: ",
                "Enter the contact's email address: ",
                "Enter the contact's birthday (YYYY-MM-DD): ",
            ] {
                match self.ask(prompt)? {
                    None => return Ok(false),
                    Some(answer) if answer == CANCEL => return Ok(true),
                    Some(answer) => answers.push(answer),
                }
            }

            if answers.iter().any(|a| a.is_empty()) {
                self.say("All fields are required. Please try again or enter '0' to cancel.")?;
                continue;
            }

            match build_record(&answers, clock.as_ref()) {
                Ok(record) => {
                    let name = record.name().to_string();
                    self.book.add_record(record);
                    self.say(&format!("Contact {} added successfully!", name))?;
                    return Ok(true);
                }
                Err(e) => {
                    self.say(&format!("Error: {}", e))?;
                    self.say("Please enter valid data.")?;
                }
            }
        }
    }

    fn edit_contact(&mut self) -> io::Result<bool> {
        let Some(name) = self.ask("Enter the contact's name to edit: ")? else {
            return Ok(false);
        };
        if !self.book.contains(&name) {
            self.say(&format!("Contact {} not found.", name))?;
            return Ok(true);
        }

        self.say(&format!("Editing Contact: {}", name))?;
        self.say("1. Edit Name")?;
        self.say("2. Edit Address")?;
        self.say("3. Edit Phone")?;
        self.say("4. Edit Email")?;
        self.say("5. Edit Birthday")?;
        let Some(field) = self.ask("Enter your choice (1/2/3/4/5): ")? else {
            return Ok(false);
        };

        match field.as_str() {
            "1" => self.edit_name(&name),
            "2" => self.edit_address(&name),
            "3" => self.edit_phones(&name),
            "4" => self.edit_email(&name),
            "5" => self.edit_birthday(&name),
            _ => {
                self.say("Invalid choice.")?;
                Ok(true)
            }
        }
    }

    fn edit_name(&mut self, name: &str) -> io::Result<bool> {
        loop {
            let Some(raw) = self.ask("Enter the new name: ")? else {
                return Ok(false);
            };
            let result = NameValidator
                .validate(&raw)
                .map_err(crate::BookError::from)
                .and_then(|new| self.book.rename(name, new));
            match result {
                Ok(()) => {
                    self.say(&format!("Contact {} name updated to {}", name, raw))?;
                    return Ok(true);
                }
                Err(e) => {
                    self.say(&format!("Error: {}", e))?;
                    self.say("Please enter a valid name.")?;
                }
            }
        }
    }

    fn edit_address(&mut self, name: &str) -> io::Result<bool> {
        loop {
            let Some(raw) = self.ask("Enter the new address: ")? else {
                return Ok(false);
            };
            match AddressValidator.validate(&raw) {
                Ok(address) => {
                    if let Some(record) = self.book.get_mut(name) {
                        record.set_address(address);
                    }
                    self.say(&format!("Address updated for {}", name))?;
                    return Ok(true);
                }
                Err(e) => {
                    self.say(&format!("Error: {}", e))?;
                    self.say("Please enter a valid address.")?;
                }
            }
        }
    }

    fn edit_phones(&mut self, name: &str) -> io::Result<bool> {
        let Some(action) = self.ask(
            "Enter '1' to edit an existing phone number, '2' to add a new one or '3' to delete one: ",
        )?
        else {
            return Ok(false);
        };

        let message = match action.as_str() {
            "1" => {
                let Some(old) = self.ask("Enter the old phone number: ")? else {
                    return Ok(false);
                };
                let Some(new) = self.ask("Enter the new phone number: ")? else {
                    return Ok(false);
                };
                self.book
                    .get_mut(name)
                    .map(|record| record.edit_phone(&old, &new))
            }
            "2" => {
                let Some(new) = self.ask("Enter the new phone number: ")? else {
                    return Ok(false);
                };
                self.book.get_mut(name).map(|record| record.add_phone(&new))
            }
            "3" => {
                let Some(phone) = self.ask("Enter the phone number to delete: ")? else {
                    return Ok(false);
                };
                self.book.get_mut(name).map(|record| {
                    match record.delete_phone(&phone) {
                        0 => format!("Phone number {} not found for {}", phone, name),
                        n => format!("Deleted {} phone number(s) from {}", n, name),
                    }
                })
            }
            _ => Some("Invalid choice.".to_string()),
        };

        if let Some(message) = message {
            self.say(&message)?;
        }
        Ok(true)
    }

    fn edit_email(&mut self, name: &str) -> io::Result<bool> {
        loop {
            let Some(raw) = self.ask("Enter the new email address: ")? else {
                return Ok(false);
            };
            match EmailValidator.validate(&raw) {
                Ok(email) => {
                    if let Some(record) = self.book.get_mut(name) {
                        record.set_primary_email(email);
                    }
                    self.say(&format!("Email address updated for {}", name))?;
                    return Ok(true);
                }
                Err(e) => {
                    self.say(&format!("Error: {}", e))?;
                    self.say("Please enter a valid email address.")?;
                }
            }
        }
    }

    fn edit_birthday(&mut self, name: &str) -> io::Result<bool> {
        let clock = self.book.clock_handle();
        loop {
            let Some(raw) = self.ask("Enter the new birthday (YYYY-MM-DD): ")? else {
                return Ok(false);
            };
            match BirthdayValidator::new(clock.as_ref()).validate(&raw) {
                Ok(birthday) => {
                    if let Some(record) = self.book.get_mut(name) {
                        record.set_birthday(Some(birthday));
                    }
                    self.say(&format!("Birthday updated for {}", name))?;
                    return Ok(true);
                }
                Err(e) => {
                    self.say(&format!("Error: {}", e))?;
                    self.say("Please enter a valid birthday (YYYY-MM-DD).")?;
                }
            }
        }
    }

    fn delete_contact(&mut self) -> io::Result<bool> {
        let Some(name) = self.ask("Enter the contact's name to delete: ")? else {
            return Ok(false);
        };
        match self.book.remove(&name) {
            Some(_) => self.say(&format!("Contact {} deleted successfully!", name))?,
            None => self.say(&format!("Contact {} not found.", name))?,
        }
        Ok(true)
    }

    fn list_contacts(&mut self) -> io::Result<bool> {
        if self.book.is_empty() {
            self.say("Address book is empty.")?;
            return Ok(true);
        }
        self.say("List of All Contacts:")?;
        let rendered: Vec<String> = self.book.iter().map(Record::render).collect();
        self.show_all(&rendered)?;
        Ok(true)
    }

    fn save_book(&mut self) -> io::Result<bool> {
        let Some(path) = self.ask_path("save the address book")? else {
            return Ok(false);
        };
        match self.book.save_to_file(&path) {
            Ok(()) => self.say(&format!(
                "Address book saved to {} successfully!",
                path.display()
            ))?,
            Err(e) => self.say(&format!("Error: {}", e))?,
        }
        Ok(true)
    }

    fn load_book(&mut self) -> io::Result<bool> {
        let Some(path) = self.ask_path("load the address book from")? else {
            return Ok(false);
        };
        match AddressBook::load_from_file_with_clock(&path, self.book.clock_handle()) {
            Ok(book) => {
                self.book = book;
                self.say(&format!(
                    "Address book loaded from {} successfully!",
                    path.display()
                ))?;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Load failed");
                self.say(&format!("Error: {}", e))?;
                self.say("The current address book was kept.")?;
            }
        }
        Ok(true)
    }

    fn search_contacts(&mut self) -> io::Result<bool> {
        let Some(query) = self.ask("Enter a search query: ")? else {
            return Ok(false);
        };
        let rendered: Vec<String> = self
            .book
            .search_records(&query)
            .into_iter()
            .map(Record::render)
            .collect();
        if rendered.is_empty() {
            self.say("No matching records found.")?;
        } else {
            self.say("Search Results:")?;
            self.show_all(&rendered)?;
        }
        Ok(true)
    }

    fn upcoming_birthdays(&mut self) -> io::Result<bool> {
        let Some(raw) = self.ask("Enter the number of days for upcoming birthdays: ")? else {
            return Ok(false);
        };
        let Ok(days) = raw.parse::<u32>() else {
            self.say("Please enter a non-negative whole number.")?;
            return Ok(true);
        };

        let rendered: Vec<String> = self
            .book
            .get_upcoming_birthday_contacts(days)
            .into_iter()
            .map(Record::render)
            .collect();
        if rendered.is_empty() {
            self.say("No upcoming birthdays found.")?;
        } else {
            self.say(&format!("Upcoming Birthdays in {} days:", days))?;
            self.show_all(&rendered)?;
        }
        Ok(true)
    }

    fn show_all(&mut self, rendered: &[String]) -> io::Result<()> {
        for item in rendered {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    /// Ask for a file name, falling back to the configured default on a blank answer.
    fn ask_path(&mut self, action: &str) -> io::Result<Option<PathBuf>> {
        let default = self.config.book_file.clone();
        let prompt = format!(
            "Enter the filename to {} ({}): ",
            action,
            default.display()
        );
        Ok(self.ask(&prompt)?.map(|answer| {
            if answer.is_empty() {
                default
            } else {
                PathBuf::from(answer)
            }
        }))
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

/// Build a record from the five add-contact answers, in prompt order.
fn build_record(answers: &[String], clock: &dyn Clock) -> Result<Record, ValidationError> {
    Record::new(
        NameValidator.validate(&answers[0])?,
        AddressValidator.validate(&answers[1])?,
        &[answers[2].as_str()],
        vec![EmailValidator.validate(&answers[3])?],
        Some(BirthdayValidator::new(clock).validate(&answers[4])?),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use std::io::Cursor;
    use std::sync::Arc;

    fn run_script(script: &str) -> (AddressBook, String) {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::ymd(2024, 6, 1).unwrap());
        let mut output = Vec::new();
        let book = {
            let mut session = Session::new(
                Cursor::new(script.as_bytes().to_vec()),
                &mut output,
                AddressBook::with_clock(clock),
                Config::default(),
            );
            session.run().unwrap();
            session.into_book()
        };
        (book, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_says_goodbye() {
        let (book, out) = run_script("9\n");
        assert!(book.is_empty());
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, out) = run_script("");
        assert!(out.contains("Address Book Menu:"));
    }

    #[test]
    fn test_invalid_choice() {
        let (_, out) = run_script("42\n9\n");
        assert!(out.contains("Invalid choice."));
    }

    #[test]
    fn test_add_contact_reprompts_after_error() {
        let script = "1\nAnn\nMain St\nbad\nann@x.com\n2000-05-01\n\
                      Ann\nMain St\n380-1234567\nann@x.com\n2000-05-01\n9\n";
        let (book, out) = run_script(script);

        assert!(out.contains("Error: Invalid phone number: bad"));
        assert!(out.contains("Contact Ann added successfully!"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_contact_cancel() {
        let (book, _) = run_script("1\nAnn\n0\n9\n");
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_requires_all_fields() {
        let (book, out) = run_script("1\nAnn\n\n\n\n\n0\n9\n");
        assert!(out.contains("All fields are required."));
        assert!(book.is_empty());
    }

    #[test]
    fn test_birthday_query_rejects_non_number() {
        let (_, out) = run_script("8\nsoon\n9\n");
        assert!(out.contains("Please enter a non-negative whole number."));
    }
}
