//! Жизненный цикл модальной формы: закрыта, создание или редактирование.
//!
//! Ровно одно из состояний создание/редактирование действует, пока модалка
//! открыта; возврат в `Closed` всегда сбрасывает выбранный идентификатор
//! (он живёт внутри варианта `Editing`).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(String),
}

impl EditorMode {
    pub fn open_for_create(&mut self) {
        *self = EditorMode::Creating;
    }

    pub fn open_for_edit(&mut self, id: String) {
        *self = EditorMode::Editing(id);
    }

    pub fn close(&mut self) {
        *self = EditorMode::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorMode::Closed)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, EditorMode::Editing(_))
    }

    /// Идентификатор редактируемой записи; `None` в режиме создания.
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            EditorMode::Editing(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let mode = EditorMode::default();
        assert!(!mode.is_open());
        assert_eq!(mode.selected_id(), None);
    }

    #[test]
    fn test_create_transition() {
        let mut mode = EditorMode::Closed;
        mode.open_for_create();
        assert!(mode.is_open());
        assert!(!mode.is_edit());
        assert_eq!(mode.selected_id(), None);
    }

    #[test]
    fn test_edit_transition() {
        let mut mode = EditorMode::Closed;
        mode.open_for_edit("42".to_string());
        assert!(mode.is_open());
        assert!(mode.is_edit());
        assert_eq!(mode.selected_id(), Some("42"));
    }

    #[test]
    fn test_close_clears_selection() {
        let mut mode = EditorMode::Editing("42".to_string());
        mode.close();
        assert_eq!(mode, EditorMode::Closed);
        assert_eq!(mode.selected_id(), None);
    }
}
