//! Операции аутентификации.

use reqwest::Method;
use serde::Serialize;

use crate::client::BirlikClient;
use crate::error::BirlikClientResult;
use crate::models::{AuthResponse, CurrentUser, RegisterRequest};

#[derive(Debug, Serialize)]
struct LoginRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

impl BirlikClient {
    /// Выполняет вход и сохраняет полученный токен в клиенте.
    pub async fn login(&mut self, email: &str, password: &str) -> BirlikClientResult<AuthResponse> {
        let payload = LoginRequestDto { email, password };
        let auth: AuthResponse = self
            .execute(self.request(Method::POST, "/api/auth/login").json(&payload))
            .await?;

        self.set_token(auth.token.clone());
        Ok(auth)
    }

    /// Регистрирует участника и сохраняет полученный токен в клиенте.
    pub async fn register(&mut self, input: &RegisterRequest) -> BirlikClientResult<AuthResponse> {
        let auth: AuthResponse = self
            .execute(self.request(Method::POST, "/api/auth/register").json(input))
            .await?;

        self.set_token(auth.token.clone());
        Ok(auth)
    }

    /// Возвращает текущую личность и связанный профиль участника.
    ///
    /// Требует установленный токен.
    pub async fn me(&self) -> BirlikClientResult<CurrentUser> {
        self.execute(self.authed(Method::GET, "/api/auth/me")?).await
    }
}
