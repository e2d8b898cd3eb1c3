//! Модели данных REST API.
//!
//! Все записи плоские и приходят с бэкенда «как есть»: клиент не проверяет
//! и не преобразует поля, только форму конверта. Имена полей на проводе —
//! camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Универсальный конверт пагинации для всех списочных эндпоинтов.
///
/// Инварианты (`items.len() <= limit`, `total_pages == ceil(total / limit)`)
/// поддерживаются на стороне бэкенда и передаются без изменений.
pub struct Paginated<T> {
    /// Элементы текущей страницы.
    pub items: Vec<T>,
    /// Общее количество элементов выборки.
    pub total: u64,
    /// Номер страницы (нумерация с 1).
    pub page: u32,
    /// Размер страницы.
    pub limit: u32,
    /// Общее количество страниц.
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Параметры пагинации списочных запросов.
///
/// Непереданные поля не попадают в строку запроса.
pub struct PageQuery {
    /// Номер страницы (нумерация с 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Размер страницы.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Параметры выборки «последних» записей (`recent`/`upcoming`).
pub struct RecentQuery {
    /// Максимальное количество записей.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Параметры административного списка участников.
pub struct MemberListQuery {
    /// Номер страницы (нумерация с 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Размер страницы.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Поиск по имени/email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Фильтр по компании.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Параметры списка объявлений недвижимости.
pub struct PropertyListQuery {
    /// Номер страницы (нумерация с 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Размер страницы.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Тип объявления (`sale`/`rent`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<String>,
    /// Поиск по заголовку/описанию.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Аутентифицированная учётная запись.
pub struct User {
    /// Идентификатор учётной записи.
    pub id: i64,
    /// Email (логин).
    pub email: String,
    /// Роль (`admin`/`member`).
    pub role: String,
    /// Флаг права на управление контентом.
    pub can_manage_content: Option<bool>,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Профиль участника ассоциации, связанный 1:1 с учётной записью.
pub struct Member {
    /// Идентификатор профиля.
    pub id: i64,
    /// Идентификатор учётной записи.
    pub user_id: i64,
    /// Полное имя.
    pub full_name: String,
    /// Компания.
    pub company: Option<String>,
    /// Должность.
    pub position: Option<String>,
    /// Телефон.
    pub phone: Option<String>,
    /// Статус одобрения администратором.
    pub approved: bool,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Ответ после успешной регистрации или входа.
pub struct AuthResponse {
    /// Bearer-токен (непрозрачная строка).
    pub token: String,
    /// Учётная запись.
    pub user: User,
    /// Связанный профиль участника, если есть.
    pub member: Option<Member>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Текущая аутентифицированная личность (`/api/auth/me`).
pub struct CurrentUser {
    /// Учётная запись.
    pub user: User,
    /// Связанный профиль участника, если есть.
    pub member: Option<Member>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные регистрации участника.
pub struct RegisterRequest {
    /// Email (логин).
    pub email: String,
    /// Пароль.
    pub password: String,
    /// Полное имя.
    pub full_name: String,
    /// Компания.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Телефон.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Новость.
pub struct News {
    /// Идентификатор.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст новости.
    pub content: String,
    /// URL изображения.
    pub image_url: Option<String>,
    /// Флаг публикации.
    pub published: bool,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления (UTC).
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления новости.
pub struct NewsInput {
    /// Заголовок.
    pub title: String,
    /// Текст новости.
    pub content: String,
    /// URL изображения.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Объявление ассоциации.
pub struct Announcement {
    /// Идентификатор.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст объявления.
    pub content: String,
    /// Флаг публикации.
    pub published: bool,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления объявления.
pub struct AnnouncementInput {
    /// Заголовок.
    pub title: String,
    /// Текст объявления.
    pub content: String,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Слайд главного экрана.
pub struct HeroSlide {
    /// Идентификатор.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Подзаголовок.
    pub subtitle: Option<String>,
    /// URL изображения.
    pub image_url: String,
    /// URL перехода по клику.
    pub link_url: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления слайда.
pub struct HeroSlideInput {
    /// Заголовок.
    pub title: String,
    /// Подзаголовок.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// URL изображения.
    pub image_url: String,
    /// URL перехода по клику.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Баннер на главной странице.
pub struct HomeBanner {
    /// Идентификатор.
    pub id: i64,
    /// Заголовок.
    pub title: Option<String>,
    /// URL изображения.
    pub image_url: String,
    /// URL перехода по клику.
    pub link_url: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления баннера.
pub struct HomeBannerInput {
    /// Заголовок.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URL изображения.
    pub image_url: String,
    /// URL перехода по клику.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Видеозапись.
pub struct Video {
    /// Идентификатор.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// URL видео.
    pub video_url: String,
    /// Флаг публикации.
    pub published: bool,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления видеозаписи.
pub struct VideoInput {
    /// Заголовок.
    pub title: String,
    /// URL видео.
    pub video_url: String,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Издание (публикация с файлом).
pub struct Publication {
    /// Идентификатор.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Описание.
    pub description: Option<String>,
    /// URL файла.
    pub file_url: String,
    /// Флаг публикации.
    pub published: bool,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления издания.
pub struct PublicationInput {
    /// Заголовок.
    pub title: String,
    /// Описание.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL файла.
    pub file_url: String,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Мероприятие.
pub struct Event {
    /// Идентификатор.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Описание.
    pub description: String,
    /// Место проведения.
    pub location: Option<String>,
    /// Дата и время начала (UTC).
    pub starts_at: DateTime<Utc>,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления мероприятия.
pub struct EventInput {
    /// Заголовок.
    pub title: String,
    /// Описание.
    pub description: String,
    /// Место проведения.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Дата и время начала (UTC).
    pub starts_at: DateTime<Utc>,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Партнёр ассоциации.
pub struct Partner {
    /// Идентификатор.
    pub id: i64,
    /// Название.
    pub name: String,
    /// URL логотипа.
    pub logo_url: String,
    /// URL сайта.
    pub website_url: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления партнёра.
pub struct PartnerInput {
    /// Название.
    pub name: String,
    /// URL логотипа.
    pub logo_url: String,
    /// URL сайта.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Должность в правлении.
pub struct BoardRole {
    /// Идентификатор.
    pub id: i64,
    /// Название должности.
    pub name: String,
    /// Порядок сортировки.
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления должности.
pub struct BoardRoleInput {
    /// Название должности.
    pub name: String,
    /// Порядок сортировки.
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Член правления.
pub struct BoardMember {
    /// Идентификатор.
    pub id: i64,
    /// Полное имя.
    pub full_name: String,
    /// Идентификатор должности.
    pub role_id: i64,
    /// URL фотографии.
    pub photo_url: Option<String>,
    /// Компания.
    pub company: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления члена правления.
pub struct BoardMemberInput {
    /// Полное имя.
    pub full_name: String,
    /// Идентификатор должности.
    pub role_id: i64,
    /// URL фотографии.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Компания.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Порядок сортировки.
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Объявление недвижимости участника.
pub struct Property {
    /// Идентификатор.
    pub id: i64,
    /// Идентификатор профиля владельца.
    pub member_id: Option<i64>,
    /// Заголовок.
    pub title: String,
    /// Описание.
    pub description: String,
    /// Тип объявления (`sale`/`rent`).
    #[serde(rename = "type")]
    pub listing_type: String,
    /// Местоположение.
    pub location: Option<String>,
    /// Цена (строка в валюте бэкенда).
    pub price: Option<String>,
    /// URL изображения.
    pub image_url: Option<String>,
    /// Флаг публикации.
    pub published: bool,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления объявления недвижимости.
pub struct PropertyInput {
    /// Заголовок.
    pub title: String,
    /// Описание.
    pub description: String,
    /// Тип объявления (`sale`/`rent`).
    #[serde(rename = "type")]
    pub listing_type: String,
    /// Местоположение.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Цена (строка в валюте бэкенда).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// URL изображения.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Содержимое статической страницы.
pub struct PageContent {
    /// Идентификатор.
    pub id: i64,
    /// Слаг страницы (`about`, `history`, ...).
    pub slug: String,
    /// Заголовок.
    pub title: String,
    /// Тело страницы.
    pub body: String,
    /// Дата и время последнего обновления (UTC).
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные создания/обновления статической страницы.
pub struct PageContentInput {
    /// Слаг страницы.
    pub slug: String,
    /// Заголовок.
    pub title: String,
    /// Тело страницы.
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Настройки сайта (контакты, соцсети).
pub struct SiteSettings {
    /// Идентификатор.
    pub id: i64,
    /// Телефон.
    pub phone: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// Адрес.
    pub address: Option<String>,
    /// Часы работы.
    pub working_hours: Option<String>,
    /// URL страницы Facebook.
    pub facebook_url: Option<String>,
    /// URL страницы Instagram.
    pub instagram_url: Option<String>,
    /// URL страницы Twitter/X.
    pub twitter_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные обновления настроек сайта.
pub struct SiteSettingsInput {
    /// Телефон.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Адрес.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Часы работы.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    /// URL страницы Facebook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    /// URL страницы Instagram.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    /// URL страницы Twitter/X.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные обновления собственного профиля участника.
pub struct MemberProfileInput {
    /// Полное имя.
    pub full_name: String,
    /// Компания.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Должность.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Телефон.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Сообщение обратной связи.
pub struct ContactMessage {
    /// Идентификатор.
    pub id: i64,
    /// Имя отправителя.
    pub name: String,
    /// Email отправителя.
    pub email: String,
    /// Тема.
    pub subject: Option<String>,
    /// Текст сообщения.
    pub message: String,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные публичной отправки сообщения обратной связи.
pub struct ContactMessageInput {
    /// Имя отправителя.
    pub name: String,
    /// Email отправителя.
    pub email: String,
    /// Тема.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Текст сообщения.
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// SMS-отзыв.
pub struct SmsFeedback {
    /// Идентификатор.
    pub id: i64,
    /// Телефон отправителя.
    pub phone: String,
    /// Текст отзыва.
    pub message: String,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Данные публичной отправки SMS-отзыва.
pub struct SmsFeedbackInput {
    /// Телефон отправителя.
    pub phone: String,
    /// Текст отзыва.
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Загруженный документ участника (для верификации членства).
pub struct MemberDocument {
    /// Идентификатор.
    pub id: i64,
    /// Идентификатор профиля участника.
    pub member_id: i64,
    /// Вид документа (`tax-certificate`, `trade-registry`, ...).
    pub kind: String,
    /// Имя файла.
    pub filename: String,
    /// MIME-тип файла.
    pub mime_type: String,
    /// Статус проверки (`pending`/`approved`/`rejected`).
    pub status: String,
    /// Комментарий проверяющего.
    pub review_note: Option<String>,
    /// Дата и время загрузки (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Решение администратора по документу участника.
pub struct ReviewDocumentInput {
    /// Новый статус (`approved`/`rejected`).
    pub status: String,
    /// Комментарий проверяющего.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_decodes_camel_case_envelope() {
        let raw = r#"{"items":[{"id":5,"title":"t","content":"c","imageUrl":null,"published":true,"createdAt":"2026-01-01T00:00:00Z","updatedAt":"2026-01-02T00:00:00Z"}],"total":11,"page":2,"limit":10,"totalPages":2}"#;
        let page: Paginated<News> = serde_json::from_str(raw).expect("envelope should parse");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 5);
        assert_eq!(page.total, 11);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn entity_decodes_without_transformation() {
        let raw = r#"{"id":1,"title":"x","content":"y","published":false,"createdAt":"2026-03-01T10:00:00Z"}"#;
        let item: Announcement = serde_json::from_str(raw).expect("announcement should parse");
        assert_eq!(item.id, 1);
        assert_eq!(item.title, "x");
        assert_eq!(item.content, "y");
        assert!(!item.published);
    }

    #[test]
    fn query_serializes_only_provided_fields() {
        let query = MemberListQuery {
            page: Some(3),
            search: Some("oz".to_string()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&query).expect("query should serialize");
        assert_eq!(encoded, serde_json::json!({"page": 3, "search": "oz"}));
    }

    #[test]
    fn property_query_uses_type_key() {
        let query = PropertyListQuery {
            listing_type: Some("rent".to_string()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&query).expect("query should serialize");
        assert_eq!(encoded, serde_json::json!({"type": "rent"}));
    }
}
