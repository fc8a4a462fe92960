//! Application state management for the terminal client.
//!
//! This module contains the main application state: which screen is shown,
//! the credential and profile form buffers with their inline validation
//! state, the theme mode, and the injected session.

use crate::application::session::Session;
use crate::domain::{
    PasswordChecks, SignInRequest, SignUpRequest, SubmitError, SubmitResult, validate_email,
    validate_password, validate_username,
};
use crate::infrastructure::{ClientConfig, TokenStore};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Marketing splash, always rendered in the dark palette
    Landing,
    /// Hero, feature list, and footer
    Home,
    /// Sign-in / sign-up forms
    Auth,
    /// Profile editor, reachable only when authenticated
    Profile,
}

/// Active tab on the auth screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    SignIn,
    SignUp,
}

/// Focusable fields of the auth form. Username and ConfirmPassword exist
/// only on the sign-up tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Focusable fields of the profile editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Email,
    NewPassword,
    ConfirmNewPassword,
}

/// UI color scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// A single-line text input buffer with a byte-offset cursor.
///
/// The cursor always sits on a character boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormField {
    pub value: String,
    pub cursor: usize,
}

impl FormField {
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
    }
}

/// A validated, ready-to-send authentication request.
#[derive(Debug, Clone)]
pub enum AuthSubmission {
    SignIn(SignInRequest),
    SignUp(SignUpRequest),
}

/// Main application state.
///
/// Holds everything needed to render the screens and react to input: the
/// current page, the injected [`Session`], the theme mode, and the two form
/// groups with their inline validation state.
///
/// # Examples
///
/// ```
/// use texttales::application::{App, Page};
///
/// let app = App::default();
/// assert_eq!(app.page, Page::Landing);
/// assert!(!app.session.is_authenticated());
/// ```
#[derive(Debug)]
pub struct App {
    /// Screen currently shown
    pub page: Page,
    /// Authentication state, injected at construction
    pub session: Session,
    /// Current color scheme
    pub theme_mode: ThemeMode,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,

    /// Active auth tab
    pub auth_tab: AuthTab,
    /// Focused auth field
    pub auth_focus: AuthField,
    /// Sign-up username input
    pub username: FormField,
    /// Email input; doubles as username-or-email on the sign-in tab
    pub email: FormField,
    /// Password input
    pub password: FormField,
    /// Sign-up confirm-password input
    pub confirm_password: FormField,
    /// Inline error under the username field
    pub username_error: Option<String>,
    /// Inline error under the email field
    pub email_error: Option<String>,
    /// Inline error under the password field, gated by `password_touched`
    pub password_error: Option<String>,
    /// Live password requirement checklist
    pub password_checks: PasswordChecks,
    /// Whether the password field has been left at least once
    pub password_touched: bool,
    /// Render the password in clear text
    pub show_password: bool,
    /// Form-level error shown above the auth form
    pub form_error: Option<String>,

    /// Focused profile field
    pub profile_focus: ProfileField,
    /// Profile username input
    pub profile_username: FormField,
    /// Profile email input
    pub profile_email: FormField,
    pub profile_username_error: Option<String>,
    pub profile_email_error: Option<String>,
    /// Username is read-only until this is enabled
    pub editing_username: bool,
    /// Email is read-only until this is enabled
    pub editing_email: bool,
    /// Whether the change-password pair is expanded
    pub show_password_fields: bool,
    pub new_password: FormField,
    pub confirm_new_password: FormField,
    pub new_password_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        let mut profile_username = FormField::default();
        profile_username.set("Moe");
        let mut profile_email = FormField::default();
        profile_email.set("email@example.com");

        Self {
            page: Page::Landing,
            session: Session::ephemeral(),
            theme_mode: ThemeMode::Light,
            status_message: None,
            auth_tab: AuthTab::SignIn,
            auth_focus: AuthField::Email,
            username: FormField::default(),
            email: FormField::default(),
            password: FormField::default(),
            confirm_password: FormField::default(),
            username_error: None,
            email_error: None,
            password_error: None,
            password_checks: PasswordChecks::default(),
            password_touched: false,
            show_password: false,
            form_error: None,
            profile_focus: ProfileField::Username,
            profile_username,
            profile_email,
            profile_username_error: None,
            profile_email_error: None,
            editing_username: false,
            editing_email: false,
            show_password_fields: false,
            new_password: FormField::default(),
            confirm_new_password: FormField::default(),
            new_password_error: None,
        }
    }
}

impl App {
    /// Builds the application state with a durable session read from the
    /// configured session file.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            session: Session::initialize(TokenStore::new(&config.session_file)),
            ..Self::default()
        }
    }

    /// Switches to another page, enforcing the profile route guard:
    /// anonymous users are redirected to the sign-in form.
    pub fn navigate(&mut self, page: Page) {
        self.status_message = None;
        if page == Page::Profile && !self.session.is_authenticated() {
            self.page = Page::Auth;
            self.auth_tab = AuthTab::SignIn;
            self.auth_focus = first_auth_field(AuthTab::SignIn);
            self.status_message = Some("Please sign in to view your profile.".to_string());
            return;
        }
        self.page = page;
    }

    /// Opens the auth screen on the given tab with focus on its first field.
    pub fn open_auth(&mut self, tab: AuthTab) {
        self.page = Page::Auth;
        self.auth_tab = tab;
        self.auth_focus = first_auth_field(tab);
        self.form_error = None;
        self.status_message = None;
    }

    /// Flips between the sign-in and sign-up tabs. Field values and their
    /// errors survive the switch.
    pub fn switch_auth_tab(&mut self) {
        self.auth_tab = match self.auth_tab {
            AuthTab::SignIn => AuthTab::SignUp,
            AuthTab::SignUp => AuthTab::SignIn,
        };
        self.auth_focus = first_auth_field(self.auth_tab);
    }

    /// Fields present on the active auth tab, in focus order.
    pub fn auth_fields(&self) -> &'static [AuthField] {
        match self.auth_tab {
            AuthTab::SignIn => &[AuthField::Email, AuthField::Password],
            AuthTab::SignUp => &[
                AuthField::Username,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }

    pub fn focus_next_auth_field(&mut self) {
        let fields = self.auth_fields();
        let idx = fields.iter().position(|f| *f == self.auth_focus).unwrap_or(0);
        self.set_auth_focus(fields[(idx + 1) % fields.len()]);
    }

    pub fn focus_prev_auth_field(&mut self) {
        let fields = self.auth_fields();
        let idx = fields.iter().position(|f| *f == self.auth_focus).unwrap_or(0);
        self.set_auth_focus(fields[(idx + fields.len() - 1) % fields.len()]);
    }

    fn set_auth_focus(&mut self, next: AuthField) {
        // Leaving the password field surfaces its error from then on.
        if self.auth_focus == AuthField::Password && next != AuthField::Password {
            self.touch_password();
        }
        self.auth_focus = next;
    }

    /// Marks the password as interacted with and surfaces its current error.
    pub fn touch_password(&mut self) {
        self.password_touched = true;
        self.password_checks = validate_password(&self.password.value);
        self.password_error = self.password_checks.error.clone();
    }

    /// Types a character into the focused auth field and re-validates it.
    pub fn auth_insert(&mut self, c: char) {
        self.active_auth_field_mut().insert(c);
        self.refresh_auth_validation();
    }

    /// Deletes before the cursor in the focused auth field and re-validates.
    pub fn auth_backspace(&mut self) {
        self.active_auth_field_mut().backspace();
        self.refresh_auth_validation();
    }

    pub fn auth_move_left(&mut self) {
        self.active_auth_field_mut().move_left();
    }

    pub fn auth_move_right(&mut self) {
        self.active_auth_field_mut().move_right();
    }

    fn active_auth_field_mut(&mut self) -> &mut FormField {
        match self.auth_focus {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    fn refresh_auth_validation(&mut self) {
        match self.auth_focus {
            AuthField::Username => {
                self.username_error = validate_username(&self.username.value);
            }
            AuthField::Email => {
                // The sign-in tab accepts a username here, so only the
                // sign-up tab validates the shape.
                if self.auth_tab == AuthTab::SignUp {
                    self.email_error = validate_email(&self.email.value);
                }
            }
            AuthField::Password => {
                self.password_checks = validate_password(&self.password.value);
                if self.password_touched {
                    self.password_error = self.password_checks.error.clone();
                }
            }
            AuthField::ConfirmPassword => {}
        }
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
    }

    /// Gates a submit and builds the request for the active tab.
    ///
    /// Checks run in the order the original form enforced them: required
    /// fields, then the confirm-password match, then outstanding inline
    /// errors. A blocked submit reports why; the caller surfaces it as the
    /// form-level error.
    pub fn prepare_submission(&mut self) -> SubmitResult<AuthSubmission> {
        self.form_error = None;

        let missing = match self.auth_tab {
            AuthTab::SignIn => self.email.value.is_empty() || self.password.value.is_empty(),
            AuthTab::SignUp => {
                self.username.value.is_empty()
                    || self.email.value.is_empty()
                    || self.password.value.is_empty()
                    || self.confirm_password.value.is_empty()
            }
        };
        if missing {
            return Err(SubmitError::MissingRequiredFields);
        }

        self.touch_password();

        if self.auth_tab == AuthTab::SignUp && self.password.value != self.confirm_password.value {
            return Err(SubmitError::PasswordsDoNotMatch);
        }

        if self.username_error.is_some()
            || self.email_error.is_some()
            || self.password_error.is_some()
        {
            return Err(SubmitError::FieldErrorsOutstanding);
        }

        let submission = match self.auth_tab {
            AuthTab::SignIn => AuthSubmission::SignIn(SignInRequest {
                username_or_email: self.email.value.clone(),
                password: self.password.value.clone(),
            }),
            AuthTab::SignUp => AuthSubmission::SignUp(SignUpRequest {
                username: self.username.value.clone(),
                email: self.email.value.clone(),
                password: self.password.value.clone(),
            }),
        };
        Ok(submission)
    }

    /// Processes the outcome of an authentication request.
    ///
    /// On success the token is handed to the session, the password buffers
    /// are wiped, the profile editor is seeded from the submitted
    /// credentials, and the app lands on the home screen. On failure the
    /// message becomes the form-level error and the form stays put.
    pub fn set_auth_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(token) => {
                self.session.login(&token);
                if !self.username.value.is_empty() {
                    let username = self.username.value.clone();
                    self.profile_username.set(username);
                }
                if !self.email.value.is_empty() {
                    let email = self.email.value.clone();
                    self.profile_email.set(email);
                }
                self.password.clear();
                self.confirm_password.clear();
                self.password_touched = false;
                self.password_error = None;
                self.password_checks = PasswordChecks::default();
                self.show_password = false;
                self.form_error = None;
                self.page = Page::Home;
                self.status_message = Some("Signed in.".to_string());
            }
            Err(error) => {
                self.form_error = Some(error);
            }
        }
    }

    /// Clears the session. Leaves the profile page if it was showing, since
    /// the guard no longer holds.
    pub fn sign_out(&mut self) {
        self.session.logout();
        if self.page == Page::Profile {
            self.page = Page::Home;
        }
        self.status_message = Some("Signed out.".to_string());
    }

    /// Fields present on the profile editor, in focus order.
    pub fn profile_fields(&self) -> &'static [ProfileField] {
        if self.show_password_fields {
            &[
                ProfileField::Username,
                ProfileField::Email,
                ProfileField::NewPassword,
                ProfileField::ConfirmNewPassword,
            ]
        } else {
            &[ProfileField::Username, ProfileField::Email]
        }
    }

    pub fn focus_next_profile_field(&mut self) {
        let fields = self.profile_fields();
        let idx = fields
            .iter()
            .position(|f| *f == self.profile_focus)
            .unwrap_or(0);
        self.profile_focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev_profile_field(&mut self) {
        let fields = self.profile_fields();
        let idx = fields
            .iter()
            .position(|f| *f == self.profile_focus)
            .unwrap_or(0);
        self.profile_focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// Unlocks the focused read-only profile field for editing.
    pub fn enable_profile_editing(&mut self) {
        match self.profile_focus {
            ProfileField::Username => self.editing_username = true,
            ProfileField::Email => self.editing_email = true,
            _ => {}
        }
    }

    /// Expands or collapses the change-password pair. Collapsing discards
    /// anything typed into it.
    pub fn toggle_password_section(&mut self) {
        self.show_password_fields = !self.show_password_fields;
        if !self.show_password_fields {
            self.new_password.clear();
            self.confirm_new_password.clear();
            self.new_password_error = None;
            if matches!(
                self.profile_focus,
                ProfileField::NewPassword | ProfileField::ConfirmNewPassword
            ) {
                self.profile_focus = ProfileField::Username;
            }
        }
    }

    /// Whether the focused profile field currently accepts input.
    pub fn profile_field_editable(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Username => self.editing_username,
            ProfileField::Email => self.editing_email,
            ProfileField::NewPassword | ProfileField::ConfirmNewPassword => true,
        }
    }

    /// Types a character into the focused profile field, if editable.
    pub fn profile_insert(&mut self, c: char) {
        if !self.profile_field_editable(self.profile_focus) {
            return;
        }
        self.active_profile_field_mut().insert(c);
        self.refresh_profile_validation();
    }

    pub fn profile_backspace(&mut self) {
        if !self.profile_field_editable(self.profile_focus) {
            return;
        }
        self.active_profile_field_mut().backspace();
        self.refresh_profile_validation();
    }

    pub fn profile_move_left(&mut self) {
        self.active_profile_field_mut().move_left();
    }

    pub fn profile_move_right(&mut self) {
        self.active_profile_field_mut().move_right();
    }

    fn active_profile_field_mut(&mut self) -> &mut FormField {
        match self.profile_focus {
            ProfileField::Username => &mut self.profile_username,
            ProfileField::Email => &mut self.profile_email,
            ProfileField::NewPassword => &mut self.new_password,
            ProfileField::ConfirmNewPassword => &mut self.confirm_new_password,
        }
    }

    fn refresh_profile_validation(&mut self) {
        match self.profile_focus {
            ProfileField::Username => {
                self.profile_username_error = validate_username(&self.profile_username.value);
            }
            ProfileField::Email => {
                self.profile_email_error = validate_email(&self.profile_email.value);
            }
            ProfileField::NewPassword => {
                self.new_password_error = validate_password(&self.new_password.value).error;
            }
            ProfileField::ConfirmNewPassword => {}
        }
    }

    /// Validates and applies the profile edits.
    ///
    /// There is no profile endpoint in scope, so a passing submit only
    /// resets the editing state and reports success.
    pub fn submit_profile(&mut self) {
        self.profile_username_error = validate_username(&self.profile_username.value);
        self.profile_email_error = validate_email(&self.profile_email.value);

        let changing_password = self.show_password_fields
            && (!self.new_password.value.is_empty() || !self.confirm_new_password.value.is_empty());
        if changing_password {
            if self.new_password.value != self.confirm_new_password.value {
                self.status_message = Some(SubmitError::PasswordsDoNotMatch.to_string());
                return;
            }
            self.new_password_error = validate_password(&self.new_password.value).error;
        } else {
            self.new_password_error = None;
        }

        if self.profile_username_error.is_some()
            || self.profile_email_error.is_some()
            || self.new_password_error.is_some()
        {
            self.status_message = Some(SubmitError::FieldErrorsOutstanding.to_string());
            return;
        }

        self.editing_username = false;
        self.editing_email = false;
        self.show_password_fields = false;
        self.new_password.clear();
        self.confirm_new_password.clear();
        self.status_message = Some("Profile updated.".to_string());
    }
}

fn first_auth_field(tab: AuthTab) -> AuthField {
    match tab {
        AuthTab::SignIn => AuthField::Email,
        AuthTab::SignUp => AuthField::Username,
    }
}
