//! Публичные чтения контента.
//!
//! Все операции этого модуля доступны без авторизации и возвращают только
//! опубликованные записи; заголовок `Authorization` не отправляется, даже
//! если токен установлен.

use reqwest::Method;

use crate::client::BirlikClient;
use crate::error::BirlikClientResult;
use crate::models::{
    Announcement, BoardMember, BoardRole, Event, HeroSlide, HomeBanner, News, PageContent,
    PageQuery, Paginated, Partner, Property, PropertyListQuery, Publication, RecentQuery,
    SiteSettings, Video,
};

impl BirlikClient {
    /// Список опубликованных новостей с пагинацией.
    pub async fn list_news(&self, query: &PageQuery) -> BirlikClientResult<Paginated<News>> {
        self.execute(self.request(Method::GET, "/api/news").query(query))
            .await
    }

    /// Возвращает новость по идентификатору.
    pub async fn get_news(&self, id: i64) -> BirlikClientResult<News> {
        self.execute(self.request(Method::GET, &format!("/api/news/{id}")))
            .await
    }

    /// Список опубликованных объявлений с пагинацией.
    pub async fn list_announcements(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<Announcement>> {
        self.execute(self.request(Method::GET, "/api/announcements").query(query))
            .await
    }

    /// Возвращает объявление по идентификатору.
    pub async fn get_announcement(&self, id: i64) -> BirlikClientResult<Announcement> {
        self.execute(self.request(Method::GET, &format!("/api/announcements/{id}")))
            .await
    }

    /// Последние опубликованные объявления.
    pub async fn recent_announcements(
        &self,
        query: &RecentQuery,
    ) -> BirlikClientResult<Vec<Announcement>> {
        self.execute(
            self.request(Method::GET, "/api/announcements/recent")
                .query(query),
        )
        .await
    }

    /// Опубликованные слайды главного экрана в порядке сортировки.
    pub async fn hero_slides(&self) -> BirlikClientResult<Vec<HeroSlide>> {
        self.execute(self.request(Method::GET, "/api/hero-slides"))
            .await
    }

    /// Опубликованные баннеры главной страницы в порядке сортировки.
    pub async fn home_banners(&self) -> BirlikClientResult<Vec<HomeBanner>> {
        self.execute(self.request(Method::GET, "/api/home-banners"))
            .await
    }

    /// Список опубликованных видеозаписей с пагинацией.
    pub async fn list_videos(&self, query: &PageQuery) -> BirlikClientResult<Paginated<Video>> {
        self.execute(self.request(Method::GET, "/api/videos").query(query))
            .await
    }

    /// Последние опубликованные видеозаписи.
    pub async fn recent_videos(&self, query: &RecentQuery) -> BirlikClientResult<Vec<Video>> {
        self.execute(self.request(Method::GET, "/api/videos/recent").query(query))
            .await
    }

    /// Список опубликованных изданий с пагинацией.
    pub async fn list_publications(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<Publication>> {
        self.execute(self.request(Method::GET, "/api/publications").query(query))
            .await
    }

    /// Последние опубликованные издания.
    pub async fn recent_publications(
        &self,
        query: &RecentQuery,
    ) -> BirlikClientResult<Vec<Publication>> {
        self.execute(
            self.request(Method::GET, "/api/publications/recent")
                .query(query),
        )
        .await
    }

    /// Список опубликованных мероприятий с пагинацией.
    pub async fn list_events(&self, query: &PageQuery) -> BirlikClientResult<Paginated<Event>> {
        self.execute(self.request(Method::GET, "/api/events").query(query))
            .await
    }

    /// Возвращает мероприятие по идентификатору.
    pub async fn get_event(&self, id: i64) -> BirlikClientResult<Event> {
        self.execute(self.request(Method::GET, &format!("/api/events/{id}")))
            .await
    }

    /// Ближайшие предстоящие мероприятия.
    pub async fn upcoming_events(&self, query: &RecentQuery) -> BirlikClientResult<Vec<Event>> {
        self.execute(self.request(Method::GET, "/api/events/upcoming").query(query))
            .await
    }

    /// Партнёры ассоциации в порядке сортировки.
    pub async fn partners(&self) -> BirlikClientResult<Vec<Partner>> {
        self.execute(self.request(Method::GET, "/api/partners")).await
    }

    /// Должности правления в порядке сортировки.
    pub async fn board_roles(&self) -> BirlikClientResult<Vec<BoardRole>> {
        self.execute(self.request(Method::GET, "/api/board-roles"))
            .await
    }

    /// Члены правления в порядке сортировки.
    pub async fn board_members(&self) -> BirlikClientResult<Vec<BoardMember>> {
        self.execute(self.request(Method::GET, "/api/board-members"))
            .await
    }

    /// Список опубликованных объявлений недвижимости с пагинацией и
    /// фильтрами по типу и поисковой строке.
    pub async fn list_properties(
        &self,
        query: &PropertyListQuery,
    ) -> BirlikClientResult<Paginated<Property>> {
        self.execute(self.request(Method::GET, "/api/properties").query(query))
            .await
    }

    /// Возвращает объявление недвижимости по идентификатору.
    pub async fn get_property(&self, id: i64) -> BirlikClientResult<Property> {
        self.execute(self.request(Method::GET, &format!("/api/properties/{id}")))
            .await
    }

    /// Содержимое статической страницы по слагу.
    pub async fn page_content(&self, slug: &str) -> BirlikClientResult<PageContent> {
        self.execute(self.request(Method::GET, &format!("/api/pages/{slug}")))
            .await
    }

    /// Настройки сайта (контакты, соцсети).
    pub async fn site_settings(&self) -> BirlikClientResult<SiteSettings> {
        self.execute(self.request(Method::GET, "/api/settings")).await
    }
}
