//! User-facing strings (ru-RU).

pub const LOGIN_FAILED: &str = "Ошибка входа";
pub const REGISTER_FAILED: &str = "Ошибка регистрации";
pub const FIELDS_REQUIRED: &str = "Заполните все поля";
pub const SESSION_SAVE_FAILED: &str = "Не удалось сохранить сессию";
pub const MESSAGES_LOAD_FAILED: &str = "Ошибка загрузки сообщений";
pub const MESSAGE_SEND_FAILED: &str = "Ошибка отправки сообщения";
pub const MESSAGE_TOO_LONG: &str = "Сообщение не должно превышать 5000 символов";
pub const PROFILE_LOAD_FAILED: &str = "Не удалось загрузить профиль";
