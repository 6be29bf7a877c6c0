//! User-facing texts of the focus-group form.

use indoc::{formatdoc, indoc};

use crate::form::event::UserInfo;

pub const WELCOME: &str = indoc! {"
    Здравствуйте!

    Спасибо, что откликнулись на наше приглашение и проявили интерес к участию в фокус-группе Divan.Online.
    Мы подготовили для вас подробные условия участия — отправляем их ниже, чтобы вы могли спокойно ознакомиться и принять решение.

    С теплом,
    Команда divan online https://divan.online/"};

pub const CHOOSE: &str = "Выберите:";

pub const APPLY_INSTRUCTIONS: &str = indoc! {"
    Пожалуйста, укажите:
    1. ФИО
    2. Ссылки на соцсети
    3. Контактные данные

    После ввода данных нажмите кнопку 'Отправить'."};

pub const APPLY_TOAST: &str = "Начинаем заполнение заявки";

pub const DATA_RECEIVED: &str = indoc! {"
    ✅ Данные получены!

    Нажмите кнопку 'Отправить' для отправки заявки."};

pub const EMPTY_FORM: &str = indoc! {"
    ❌ Вы не заполнили данные для заявки.

    Пожалуйста, напишите:
    1. ФИО
    2. Ссылки на соцсети
    3. Контактные данные

    Затем нажмите 'Отправить' снова."};

pub const EMPTY_FORM_TOAST: &str = "Заполните данные!";

pub const SUBMIT_SUCCESS: &str = indoc! {"
    ✅ Спасибо! Ваша заявка успешно отправлена.

    Мы свяжемся с вами в ближайшее время."};

pub const NOT_INTERESTED_TOAST: &str = "Спасибо за внимание!";

/// Shown instead of an error when the admin forward failed.
pub fn submit_accepted(contact: &str) -> String {
    formatdoc! {"
        ✅ Спасибо! Ваша заявка принята.

        Мы свяжемся с вами в ближайшее время.

        📞 Контакт для связи: {contact}"}
}

pub fn not_interested(contact: &str) -> String {
    formatdoc! {"
        Спасибо, что нашли время ознакомиться с нашим предложением и условиями фокус-группы.
        Мы ценим ваш интерес к платформе Divan.Online и надеемся, что в будущем у нас появится возможность поработать вместе.

        Если формат фокус-группы вам пока не подходит, вы всё равно можете:

        — Размещать свой профиль на платформе и получать клиентов
        — Принимать участие в отдельных спецпроектах
        — Получать рассылки с новыми возможностями

        Двери Divan.Online всегда открыты для вас.
        Если захотите вернуться — напишите нам в любое время.

        С теплом и уважением,
        Команда Divan.Online
        Почта: {contact}"}
}

/// Reply to `/id`.
pub fn who_am_i(user: &UserInfo) -> String {
    format!(
        "Ваш chat_id: {}\nUsername: {}\nИмя: {}",
        user.id,
        user.handle_or("Не указан"),
        user.display_name()
    )
}

/// The application as the administrator receives it.
///
/// `data` is the applicant's text, already trimmed.
pub fn application_record(user: &UserInfo, data: &str) -> String {
    format!(
        "📋 Новая заявка на участие в фокус-группе\n\n\
         👤 Username: {}\n\
         👤 Имя: {}\n\n\
         📝 Данные заявки:\n{}",
        user.handle_or("Не указан"),
        user.display_name(),
        data
    )
}
