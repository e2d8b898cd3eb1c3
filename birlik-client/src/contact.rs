//! Обратная связь: публичная отправка и административный просмотр.

use reqwest::Method;

use crate::client::BirlikClient;
use crate::error::BirlikClientResult;
use crate::models::{
    ContactMessage, ContactMessageInput, PageQuery, Paginated, SmsFeedback, SmsFeedbackInput,
};

impl BirlikClient {
    /// Публичная отправка сообщения обратной связи.
    pub async fn submit_contact_message(
        &self,
        input: &ContactMessageInput,
    ) -> BirlikClientResult<ContactMessage> {
        self.execute(self.request(Method::POST, "/api/contact").json(input))
            .await
    }

    /// Публичная отправка SMS-отзыва.
    pub async fn submit_sms_feedback(
        &self,
        input: &SmsFeedbackInput,
    ) -> BirlikClientResult<SmsFeedback> {
        self.execute(self.request(Method::POST, "/api/sms-feedback").json(input))
            .await
    }

    /// Список сообщений обратной связи с пагинацией.
    pub async fn list_contact_messages(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<ContactMessage>> {
        self.execute(self.authed(Method::GET, "/api/contact")?.query(query))
            .await
    }

    /// Список SMS-отзывов с пагинацией.
    pub async fn list_sms_feedback(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<SmsFeedback>> {
        self.execute(self.authed(Method::GET, "/api/sms-feedback")?.query(query))
            .await
    }
}
