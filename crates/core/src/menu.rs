/// A flat popup menu attached to the application's taskbar icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskbarMenu {
    items: Vec<String>,
}

impl TaskbarMenu {
    pub fn new() -> Self {
        TaskbarMenu::default()
    }

    pub fn add(mut self, label: impl Into<String>) -> Self {
        self.items.push(label.into());
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_item_order() {
        let menu = TaskbarMenu::new().add("Open").add("Pause").add("Quit");
        assert_eq!(menu.items(), ["Open", "Pause", "Quit"]);
        assert_eq!(menu.len(), 3);
        assert!(!menu.is_empty());
    }
}
