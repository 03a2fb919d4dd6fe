//! Top-level menu options.

/// An entry in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    List,
    Save,
    Load,
    Search,
    Birthdays,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::List,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Search,
        MenuChoice::Birthdays,
        MenuChoice::Exit,
    ];

    /// The key the user types to pick this entry.
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Edit => 2,
            MenuChoice::Delete => 3,
            MenuChoice::List => 4,
            MenuChoice::Save => 5,
            MenuChoice::Load => 6,
            MenuChoice::Search => 7,
            MenuChoice::Birthdays => 8,
            MenuChoice::Exit => 9,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a Contact",
            MenuChoice::Edit => "Edit a Contact",
            MenuChoice::Delete => "Delete a Contact",
            MenuChoice::List => "List All Contacts",
            MenuChoice::Save => "Save Address Book",
            MenuChoice::Load => "Load Address Book",
            MenuChoice::Search => "Search Contacts",
            MenuChoice::Birthdays => "View Upcoming Birthdays",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a menu answer; surrounding whitespace is ignored.
    pub fn from_input(input: &str) -> Option<Self> {
        let key: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::from_input(" 9 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("0"), None);
        assert_eq!(MenuChoice::from_input("10"), None);
        assert_eq!(MenuChoice::from_input("add"), None);
    }

    #[test]
    fn test_keys_are_sequential() {
        let keys: Vec<u8> = MenuChoice::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, (1..=9).collect::<Vec<u8>>());
    }
}
