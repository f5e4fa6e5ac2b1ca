//! Console lines printed by the scenario.

use friendgraph_core::Person;

pub fn greeting(result: &str) -> String {
    format!("Результат тестового запроса: {result}")
}

pub fn seeded() -> String {
    "\nТестовые данные созданы".to_string()
}

pub fn friends(name: &str, friends: &[String]) -> String {
    let list = friends
        .iter()
        .map(|f| format!("'{f}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("\nДрузья ({name}): [{list}]")
}

pub fn people_header() -> String {
    "\nВсе люди по возрасту:".to_string()
}

pub fn person(p: &Person) -> String {
    format!("- {p}")
}

pub fn deleted(count: i64) -> String {
    format!("\nУдалено {count} узлов и всех их связей")
}

pub fn closed() -> String {
    "\nСоединение закрыто".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friends_line_lists_names() {
        let line = friends("Алиса", &["Боб".to_string(), "Чарли".to_string()]);
        assert_eq!(line, "\nДрузья (Алиса): ['Боб', 'Чарли']");
    }

    #[test]
    fn friends_line_empty() {
        assert_eq!(friends("Чебурашка", &[]), "\nДрузья (Чебурашка): []");
    }

    #[test]
    fn person_line() {
        assert_eq!(person(&Person::new("Чарли", 35)), "- Чарли: 35 лет");
    }

    #[test]
    fn deleted_line() {
        assert_eq!(deleted(4), "\nУдалено 4 узлов и всех их связей");
    }
}
