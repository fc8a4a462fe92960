use crate::application::{App, AuthSubmission, AuthTab, Page};
use crate::infrastructure::AuthClient;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, api: &AuthClient, key: KeyCode, modifiers: KeyModifiers) {
        match app.page {
            Page::Landing => Self::handle_landing(app, key),
            Page::Home => Self::handle_home(app, key),
            Page::Auth => Self::handle_auth(app, api, key, modifiers),
            Page::Profile => Self::handle_profile(app, key, modifiers),
        }
    }

    fn handle_landing(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('s') => app.open_auth(AuthTab::SignUp),
            KeyCode::Char('l') => app.open_auth(AuthTab::SignIn),
            KeyCode::Enter => app.navigate(Page::Home),
            _ => {}
        }
    }

    fn handle_home(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Char('a') => app.open_auth(AuthTab::SignIn),
            KeyCode::Char('p') => app.navigate(Page::Profile),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Char('x') => {
                if app.session.is_authenticated() {
                    app.sign_out();
                }
            }
            KeyCode::Char('h') => app.navigate(Page::Home),
            KeyCode::Esc => app.navigate(Page::Landing),
            _ => {}
        }
    }

    fn handle_auth(app: &mut App, api: &AuthClient, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('r') => app.toggle_show_password(),
                KeyCode::Char('t') => app.toggle_theme(),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Tab | KeyCode::BackTab => app.switch_auth_tab(),
            KeyCode::Up => app.focus_prev_auth_field(),
            KeyCode::Down => app.focus_next_auth_field(),
            KeyCode::Left => app.auth_move_left(),
            KeyCode::Right => app.auth_move_right(),
            KeyCode::Backspace => app.auth_backspace(),
            KeyCode::Enter => Self::submit_auth(app, api),
            KeyCode::Esc => app.navigate(Page::Home),
            KeyCode::Char(c) => app.auth_insert(c),
            _ => {}
        }
    }

    // Validation gates the network call; a blocked submit never leaves the
    // process.
    fn submit_auth(app: &mut App, api: &AuthClient) {
        match app.prepare_submission() {
            Ok(AuthSubmission::SignIn(request)) => {
                let result = api.sign_in(&request);
                app.set_auth_result(result);
            }
            Ok(AuthSubmission::SignUp(request)) => {
                let result = api.sign_up_and_sign_in(&request);
                app.set_auth_result(result);
            }
            Err(block) => {
                app.form_error = Some(block.to_string());
            }
        }
    }

    fn handle_profile(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('e') => app.enable_profile_editing(),
                KeyCode::Char('p') => app.toggle_password_section(),
                KeyCode::Char('t') => app.toggle_theme(),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Up => app.focus_prev_profile_field(),
            KeyCode::Down => app.focus_next_profile_field(),
            KeyCode::Left => app.profile_move_left(),
            KeyCode::Right => app.profile_move_right(),
            KeyCode::Backspace => app.profile_backspace(),
            KeyCode::Enter => app.submit_profile(),
            KeyCode::Esc => app.navigate(Page::Home),
            KeyCode::Char(c) => app.profile_insert(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{AuthField, ProfileField};

    fn test_api() -> AuthClient {
        // Never reached by the tests below; submits are gated off first.
        AuthClient::new("http://127.0.0.1:1")
    }

    #[test]
    fn test_landing_keys_open_auth_tabs() {
        let api = test_api();
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(app.page, Page::Auth);
        assert_eq!(app.auth_tab, AuthTab::SignUp);

        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(app.page, Page::Auth);
        assert_eq!(app.auth_tab, AuthTab::SignIn);

        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, &api, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_home_profile_key_is_guarded() {
        let api = test_api();
        let mut app = App::default();
        app.navigate(Page::Home);

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(app.page, Page::Auth);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please sign in to view your profile.")
        );
    }

    #[test]
    fn test_auth_typing_and_tab_switch() {
        let api = test_api();
        let mut app = App::default();
        app.open_auth(AuthTab::SignIn);

        for c in "moe".chars() {
            InputHandler::handle_key_event(&mut app, &api, KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.email.value, "moe");

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.email.value, "mo");

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.auth_tab, AuthTab::SignUp);
        assert_eq!(app.auth_focus, AuthField::Username);
    }

    #[test]
    fn test_control_keys_do_not_type_into_fields() {
        let api = test_api();
        let mut app = App::default();
        app.open_auth(AuthTab::SignIn);

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(app.show_password);
        assert!(app.email.value.is_empty());

        // Unbound control chords are ignored entirely.
        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert!(app.email.value.is_empty());
    }

    #[test]
    fn test_blocked_submit_sets_form_error_without_network() {
        let api = test_api();
        let mut app = App::default();
        app.open_auth(AuthTab::SignIn);

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            app.form_error.as_deref(),
            Some("Please fill in all required fields.")
        );
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn test_profile_edit_chord_unlocks_focused_field() {
        let api = test_api();
        let mut app = App::default();
        app.session.login("tok123");
        app.navigate(Page::Profile);
        assert_eq!(app.profile_focus, ProfileField::Username);

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.profile_username.value, "Moe");

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('e'), KeyModifiers::CONTROL);
        InputHandler::handle_key_event(&mut app, &api, KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.profile_username.value, "Moex");
    }

    #[test]
    fn test_escape_returns_home_from_forms() {
        let api = test_api();
        let mut app = App::default();
        app.open_auth(AuthTab::SignIn);

        InputHandler::handle_key_event(&mut app, &api, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.page, Page::Home);
    }
}
