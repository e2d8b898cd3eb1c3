//! Кабинет участника и администрирование участников.
//!
//! Операции `my_*` работают от имени владельца токена; административные
//! операции требуют роль `admin` (проверяется бэкендом).

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Method;
use serde::Serialize;

use crate::client::BirlikClient;
use crate::download::DocumentDownload;
use crate::error::BirlikClientResult;
use crate::models::{
    Member, MemberDocument, MemberListQuery, MemberProfileInput, Paginated, Property,
    PropertyInput, ReviewDocumentInput,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadDocumentDto<'a> {
    kind: &'a str,
    filename: &'a str,
    mime_type: &'a str,
    /// Содержимое файла, base64 (standard alphabet, с паддингом).
    data: String,
}

fn upload_payload<'a>(
    kind: &'a str,
    filename: &'a str,
    mime_type: &'a str,
    data: &[u8],
) -> UploadDocumentDto<'a> {
    UploadDocumentDto {
        kind,
        filename,
        mime_type,
        data: BASE64.encode(data),
    }
}

#[derive(Debug, Serialize)]
struct SetPasswordDto<'a> {
    password: &'a str,
}

impl BirlikClient {
    /// Собственный профиль участника.
    pub async fn my_profile(&self) -> BirlikClientResult<Member> {
        self.execute(self.authed(Method::GET, "/api/members/me")?).await
    }

    /// Обновляет собственный профиль участника.
    pub async fn update_my_profile(
        &self,
        input: &MemberProfileInput,
    ) -> BirlikClientResult<Member> {
        self.execute(self.authed(Method::PUT, "/api/members/me")?.json(input))
            .await
    }

    /// Собственные объявления недвижимости (включая неопубликованные).
    pub async fn my_properties(&self) -> BirlikClientResult<Vec<Property>> {
        self.execute(self.authed(Method::GET, "/api/members/me/properties")?)
            .await
    }

    /// Создаёт собственное объявление недвижимости.
    pub async fn create_my_property(&self, input: &PropertyInput) -> BirlikClientResult<Property> {
        self.execute(
            self.authed(Method::POST, "/api/members/me/properties")?
                .json(input),
        )
        .await
    }

    /// Полностью обновляет собственное объявление недвижимости.
    pub async fn update_my_property(
        &self,
        id: i64,
        input: &PropertyInput,
    ) -> BirlikClientResult<Property> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/members/me/properties/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет собственное объявление недвижимости.
    pub async fn delete_my_property(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(
            self.authed(Method::DELETE, &format!("/api/members/me/properties/{id}"))?,
        )
        .await
    }

    /// Собственные загруженные документы.
    pub async fn my_documents(&self) -> BirlikClientResult<Vec<MemberDocument>> {
        self.execute(self.authed(Method::GET, "/api/members/me/documents")?)
            .await
    }

    /// Загружает новый документ для верификации членства.
    ///
    /// Содержимое передаётся в JSON-теле в base64.
    pub async fn upload_document(
        &self,
        kind: &str,
        filename: &str,
        mime_type: &str,
        data: &[u8],
    ) -> BirlikClientResult<MemberDocument> {
        let payload = upload_payload(kind, filename, mime_type, data);
        self.execute(
            self.authed(Method::POST, "/api/members/me/documents")?
                .json(&payload),
        )
        .await
    }

    /// Скачивает файл документа.
    ///
    /// Доступно владельцу документа и администратору.
    pub async fn download_document(&self, id: i64) -> BirlikClientResult<DocumentDownload> {
        self.execute_download(
            self.authed(Method::GET, &format!("/api/member-documents/{id}/download"))?,
        )
        .await
    }

    /// Список всех участников с пагинацией и фильтрами.
    pub async fn list_members(
        &self,
        query: &MemberListQuery,
    ) -> BirlikClientResult<Paginated<Member>> {
        self.execute(self.authed(Method::GET, "/api/members")?.query(query))
            .await
    }

    /// Одобряет заявку участника.
    pub async fn approve_member(&self, id: i64) -> BirlikClientResult<Member> {
        self.execute(self.authed(Method::PATCH, &format!("/api/members/{id}/approve"))?)
            .await
    }

    /// Отклоняет заявку участника.
    pub async fn reject_member(&self, id: i64) -> BirlikClientResult<Member> {
        self.execute(self.authed(Method::PATCH, &format!("/api/members/{id}/reject"))?)
            .await
    }

    /// Принудительно задаёт участнику новый пароль.
    pub async fn set_member_password(&self, id: i64, password: &str) -> BirlikClientResult<()> {
        let payload = SetPasswordDto { password };
        self.execute_empty(
            self.authed(Method::PATCH, &format!("/api/members/{id}/password"))?
                .json(&payload),
        )
        .await
    }

    /// Удаляет участника вместе с профилем.
    pub async fn delete_member(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/members/{id}"))?)
            .await
    }

    /// Документы конкретного участника.
    pub async fn member_documents(
        &self,
        member_id: i64,
    ) -> BirlikClientResult<Vec<MemberDocument>> {
        self.execute(self.authed(Method::GET, &format!("/api/members/{member_id}/documents"))?)
            .await
    }

    /// Выносит решение по документу участника.
    pub async fn review_document(
        &self,
        id: i64,
        input: &ReviewDocumentInput,
    ) -> BirlikClientResult<MemberDocument> {
        self.execute(
            self.authed(Method::PATCH, &format!("/api/member-documents/{id}"))?
                .json(input),
        )
        .await
    }

    /// Запрашивает у участника повторную загрузку документа.
    pub async fn request_document_resubmission(
        &self,
        id: i64,
    ) -> BirlikClientResult<MemberDocument> {
        self.execute(
            self.authed(Method::PATCH, &format!("/api/member-documents/{id}/resubmit"))?,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_payload_encodes_base64() {
        let payload = upload_payload("tax-certificate", "vergi.pdf", "application/pdf", b"hello");
        assert_eq!(payload.data, "aGVsbG8=");

        let encoded = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(
            encoded,
            serde_json::json!({
                "kind": "tax-certificate",
                "filename": "vergi.pdf",
                "mimeType": "application/pdf",
                "data": "aGVsbG8="
            })
        );
    }
}
