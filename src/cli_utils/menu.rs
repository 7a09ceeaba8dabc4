use crate::cli_utils::CliResult;
use dialoguer::Select;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    /// Create a new menu with a title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    /// Add multiple items
    pub fn items(mut self, items: Vec<&str>) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        Ok(Select::new()
            .with_prompt(&self.title)
            .items(&self.items)
            .default(0)
            .interact()?)
    }
}

/// Top level actions of the expenses CLI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpenseAction {
    List,
    Add,
    Update,
    Delete,
    Summary,
    Filter,
    Sort,
    Backup,
    Exit,
}

impl ExpenseAction {
    const ALL: [ExpenseAction; 9] = [
        ExpenseAction::List,
        ExpenseAction::Add,
        ExpenseAction::Update,
        ExpenseAction::Delete,
        ExpenseAction::Summary,
        ExpenseAction::Filter,
        ExpenseAction::Sort,
        ExpenseAction::Backup,
        ExpenseAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseAction::List => "List expenses",
            ExpenseAction::Add => "Add expense",
            ExpenseAction::Update => "Update expense",
            ExpenseAction::Delete => "Delete expense",
            ExpenseAction::Summary => "Summary",
            ExpenseAction::Filter => "Filter by date",
            ExpenseAction::Sort => "Sort",
            ExpenseAction::Backup => "Backup data file",
            ExpenseAction::Exit => "Exit",
        }
    }

    fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(ExpenseAction::Exit)
    }

    /// Show action selection menu
    pub fn select() -> CliResult<Self> {
        let labels: Vec<&str> = Self::ALL.iter().map(|a| a.label()).collect();
        let index = Menu::new("Select action").items(labels).interact()?;
        Ok(Self::from_index(index))
    }
}
