//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.model.set_should_quit(true).await;
            return;
        }

        // Help popup swallows everything but its own dismiss keys
        if self.model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.model.hide_help_popup().await;
            }
            return;
        }

        let input_empty = self.model.read_search_input().await.is_empty();
        match key.code {
            KeyCode::Enter => {
                if !self.model.is_search_enabled().await {
                    return;
                }
                // Grey the control out before the task gets to run
                self.model.set_search_enabled(false).await;
                let controller = self.clone();
                tokio::spawn(async move {
                    // Failures are already surfaced on the model and logged
                    let _ = controller.search().await;
                });
            }
            KeyCode::Esc => {
                if self.model.has_error().await {
                    self.model.clear_error().await;
                } else if !self.model.is_search_in_flight().await {
                    self.model.reset_search_input().await;
                }
            }
            KeyCode::Backspace => self.model.backspace_search().await,
            KeyCode::Char('?') if input_empty => {
                self.model.toggle_help_popup().await;
            }
            KeyCode::Char(c) => self.model.append_to_search(c).await,
            _ => {}
        }
    }

    /// Bracketed paste appends to the artist name, newlines dropped
    pub async fn handle_paste(&self, text: &str) {
        if self.model.is_help_popup_open().await {
            return;
        }
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        let mut input = self.model.read_search_input().await;
        input.push_str(&pasted);
        self.model.write_search_input(input).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{Mutex, Notify};

    use crate::error::CatalogError;
    use crate::model::{
        AccessToken, AppModel, ArtistMatch, AudioFeatureSample, CatalogApi, Credentials, Track,
    };

    #[derive(Default)]
    struct RecordingCatalog {
        searched: Notify,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CatalogApi for RecordingCatalog {
        async fn fetch_access_token(&self, _: &Credentials) -> Result<AccessToken, CatalogError> {
            Ok(AccessToken::new("tok"))
        }

        async fn search_artist_by_name(&self, _: &AccessToken, name: &str) -> Result<Vec<ArtistMatch>, CatalogError> {
            self.queries.lock().await.push(name.to_string());
            self.searched.notify_one();
            Ok(Vec::new())
        }

        async fn fetch_top_tracks(&self, _: &AccessToken, _: &str) -> Result<Vec<Track>, CatalogError> {
            Ok(Vec::new())
        }

        async fn fetch_audio_features(&self, _: &AccessToken, _: &str) -> Result<Vec<AudioFeatureSample>, CatalogError> {
            Ok(Vec::new())
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn controller() -> AppController {
        AppController::new(AppModel::new(), Arc::new(RecordingCatalog::default()))
    }

    async fn ready_controller() -> (AppController, Arc<RecordingCatalog>) {
        let catalog = Arc::new(RecordingCatalog::default());
        let controller = AppController::new(AppModel::new(), catalog.clone());
        controller
            .startup(&Credentials::new("id", "secret"))
            .await
            .expect("startup");
        (controller, catalog)
    }

    #[tokio::test]
    async fn enter_with_blank_input_does_not_search() {
        let (controller, catalog) = ready_controller().await;

        controller.handle_key_event(press(KeyCode::Enter)).await;
        for c in "   ".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await;
        }
        controller.handle_key_event(press(KeyCode::Enter)).await;

        let searched = tokio::time::timeout(Duration::from_millis(100), catalog.searched.notified()).await;
        assert!(searched.is_err());
        assert!(catalog.queries.lock().await.is_empty());
    }

    #[tokio::test]
    async fn enter_with_artist_name_starts_search() {
        let (controller, catalog) = ready_controller().await;
        for c in "Muse".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await;
        }

        controller.handle_key_event(press(KeyCode::Enter)).await;

        tokio::time::timeout(Duration::from_secs(5), catalog.searched.notified())
            .await
            .expect("search started");
        assert_eq!(*catalog.queries.lock().await, vec!["Muse".to_string()]);
    }

    #[tokio::test]
    async fn typing_enables_search_control() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char(' '))).await;
        assert!(!controller.model.is_search_enabled().await);

        for c in "Muse".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await;
        }
        assert_eq!(controller.model.read_search_input().await, " Muse");
        assert!(controller.model.is_search_enabled().await);
    }

    #[tokio::test]
    async fn escape_dismisses_alert_before_clearing_input() {
        let controller = controller();
        controller.model.write_search_input("Muse".into()).await;
        controller.model.show_error("oops".into()).await;

        controller.handle_key_event(press(KeyCode::Esc)).await;
        assert!(!controller.model.has_error().await);
        assert_eq!(controller.model.read_search_input().await, "Muse");

        controller.handle_key_event(press(KeyCode::Esc)).await;
        assert_eq!(controller.model.read_search_input().await, "");
    }

    #[tokio::test]
    async fn question_mark_toggles_help_only_on_empty_input() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char('?'))).await;
        assert!(controller.model.is_help_popup_open().await);
        controller.handle_key_event(press(KeyCode::Char('x'))).await;
        assert_eq!(controller.model.read_search_input().await, "");
        controller.handle_key_event(press(KeyCode::Esc)).await;
        assert!(!controller.model.is_help_popup_open().await);

        controller.model.write_search_input("Who".into()).await;
        controller.handle_key_event(press(KeyCode::Char('?'))).await;
        assert!(!controller.model.is_help_popup_open().await);
        assert_eq!(controller.model.read_search_input().await, "Who?");
    }

    #[tokio::test]
    async fn paste_extends_input_without_newlines() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char('A'))).await;
        controller.handle_paste("rctic Monkeys\r\n").await;

        assert_eq!(controller.model.read_search_input().await, "Arctic Monkeys");
        assert!(controller.model.is_search_enabled().await);
    }

    #[tokio::test]
    async fn enter_disables_control_immediately() {
        let (controller, catalog) = ready_controller().await;
        controller.model.write_search_input("Muse".into()).await;

        controller.handle_key_event(press(KeyCode::Enter)).await;
        controller.handle_key_event(press(KeyCode::Enter)).await;

        tokio::time::timeout(Duration::from_secs(5), catalog.searched.notified())
            .await
            .expect("search started");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(catalog.queries.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn ctrl_c_quits() {
        let controller = controller();
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
        assert!(controller.model.should_quit().await);
    }
}
