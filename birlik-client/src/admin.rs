//! Административное управление контентом.
//!
//! Все операции требуют токен учётной записи с ролью `admin`; проверка
//! роли выполняется бэкендом. Списочные варианты `admin_*` возвращают и
//! неопубликованные записи.

use reqwest::Method;

use crate::client::BirlikClient;
use crate::error::BirlikClientResult;
use crate::models::{
    Announcement, AnnouncementInput, BoardMember, BoardMemberInput, BoardRole, BoardRoleInput,
    Event, EventInput, HeroSlide, HeroSlideInput, HomeBanner, HomeBannerInput, News, NewsInput,
    PageContent, PageContentInput, PageQuery, Paginated, Partner, PartnerInput, Property,
    PropertyInput, PropertyListQuery, Publication, PublicationInput, SiteSettings,
    SiteSettingsInput, Video, VideoInput,
};

impl BirlikClient {
    /// Все новости (включая неопубликованные) с пагинацией.
    pub async fn admin_list_news(&self, query: &PageQuery) -> BirlikClientResult<Paginated<News>> {
        self.execute(self.authed(Method::GET, "/api/news/admin/all")?.query(query))
            .await
    }

    /// Создаёт новость.
    pub async fn create_news(&self, input: &NewsInput) -> BirlikClientResult<News> {
        self.execute(self.authed(Method::POST, "/api/news")?.json(input))
            .await
    }

    /// Полностью обновляет новость.
    pub async fn update_news(&self, id: i64, input: &NewsInput) -> BirlikClientResult<News> {
        self.execute(self.authed(Method::PUT, &format!("/api/news/{id}"))?.json(input))
            .await
    }

    /// Удаляет новость.
    pub async fn delete_news(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/news/{id}"))?)
            .await
    }

    /// Все объявления (включая неопубликованные) с пагинацией.
    pub async fn admin_list_announcements(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<Announcement>> {
        self.execute(
            self.authed(Method::GET, "/api/announcements/admin/all")?
                .query(query),
        )
        .await
    }

    /// Создаёт объявление.
    pub async fn create_announcement(
        &self,
        input: &AnnouncementInput,
    ) -> BirlikClientResult<Announcement> {
        self.execute(self.authed(Method::POST, "/api/announcements")?.json(input))
            .await
    }

    /// Полностью обновляет объявление.
    pub async fn update_announcement(
        &self,
        id: i64,
        input: &AnnouncementInput,
    ) -> BirlikClientResult<Announcement> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/announcements/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет объявление.
    pub async fn delete_announcement(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/announcements/{id}"))?)
            .await
    }

    /// Все слайды главного экрана, включая неопубликованные.
    pub async fn admin_hero_slides(&self) -> BirlikClientResult<Vec<HeroSlide>> {
        self.execute(self.authed(Method::GET, "/api/hero-slides/admin/all")?)
            .await
    }

    /// Создаёт слайд главного экрана.
    pub async fn create_hero_slide(&self, input: &HeroSlideInput) -> BirlikClientResult<HeroSlide> {
        self.execute(self.authed(Method::POST, "/api/hero-slides")?.json(input))
            .await
    }

    /// Полностью обновляет слайд главного экрана.
    pub async fn update_hero_slide(
        &self,
        id: i64,
        input: &HeroSlideInput,
    ) -> BirlikClientResult<HeroSlide> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/hero-slides/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет слайд главного экрана.
    pub async fn delete_hero_slide(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/hero-slides/{id}"))?)
            .await
    }

    /// Все баннеры главной страницы, включая неопубликованные.
    pub async fn admin_home_banners(&self) -> BirlikClientResult<Vec<HomeBanner>> {
        self.execute(self.authed(Method::GET, "/api/home-banners/admin/all")?)
            .await
    }

    /// Создаёт баннер.
    pub async fn create_home_banner(
        &self,
        input: &HomeBannerInput,
    ) -> BirlikClientResult<HomeBanner> {
        self.execute(self.authed(Method::POST, "/api/home-banners")?.json(input))
            .await
    }

    /// Полностью обновляет баннер.
    pub async fn update_home_banner(
        &self,
        id: i64,
        input: &HomeBannerInput,
    ) -> BirlikClientResult<HomeBanner> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/home-banners/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет баннер.
    pub async fn delete_home_banner(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/home-banners/{id}"))?)
            .await
    }

    /// Все видеозаписи (включая неопубликованные) с пагинацией.
    pub async fn admin_list_videos(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<Video>> {
        self.execute(self.authed(Method::GET, "/api/videos/admin/all")?.query(query))
            .await
    }

    /// Создаёт видеозапись.
    pub async fn create_video(&self, input: &VideoInput) -> BirlikClientResult<Video> {
        self.execute(self.authed(Method::POST, "/api/videos")?.json(input))
            .await
    }

    /// Полностью обновляет видеозапись.
    pub async fn update_video(&self, id: i64, input: &VideoInput) -> BirlikClientResult<Video> {
        self.execute(self.authed(Method::PUT, &format!("/api/videos/{id}"))?.json(input))
            .await
    }

    /// Удаляет видеозапись.
    pub async fn delete_video(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/videos/{id}"))?)
            .await
    }

    /// Все издания (включая неопубликованные) с пагинацией.
    pub async fn admin_list_publications(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<Publication>> {
        self.execute(
            self.authed(Method::GET, "/api/publications/admin/all")?
                .query(query),
        )
        .await
    }

    /// Создаёт издание.
    pub async fn create_publication(
        &self,
        input: &PublicationInput,
    ) -> BirlikClientResult<Publication> {
        self.execute(self.authed(Method::POST, "/api/publications")?.json(input))
            .await
    }

    /// Полностью обновляет издание.
    pub async fn update_publication(
        &self,
        id: i64,
        input: &PublicationInput,
    ) -> BirlikClientResult<Publication> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/publications/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет издание.
    pub async fn delete_publication(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/publications/{id}"))?)
            .await
    }

    /// Все мероприятия (включая неопубликованные) с пагинацией.
    pub async fn admin_list_events(
        &self,
        query: &PageQuery,
    ) -> BirlikClientResult<Paginated<Event>> {
        self.execute(self.authed(Method::GET, "/api/events/admin/all")?.query(query))
            .await
    }

    /// Создаёт мероприятие.
    pub async fn create_event(&self, input: &EventInput) -> BirlikClientResult<Event> {
        self.execute(self.authed(Method::POST, "/api/events")?.json(input))
            .await
    }

    /// Полностью обновляет мероприятие.
    pub async fn update_event(&self, id: i64, input: &EventInput) -> BirlikClientResult<Event> {
        self.execute(self.authed(Method::PUT, &format!("/api/events/{id}"))?.json(input))
            .await
    }

    /// Удаляет мероприятие.
    pub async fn delete_event(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/events/{id}"))?)
            .await
    }

    /// Создаёт партнёра.
    pub async fn create_partner(&self, input: &PartnerInput) -> BirlikClientResult<Partner> {
        self.execute(self.authed(Method::POST, "/api/partners")?.json(input))
            .await
    }

    /// Полностью обновляет партнёра.
    pub async fn update_partner(
        &self,
        id: i64,
        input: &PartnerInput,
    ) -> BirlikClientResult<Partner> {
        self.execute(self.authed(Method::PUT, &format!("/api/partners/{id}"))?.json(input))
            .await
    }

    /// Удаляет партнёра.
    pub async fn delete_partner(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/partners/{id}"))?)
            .await
    }

    /// Создаёт должность правления.
    pub async fn create_board_role(&self, input: &BoardRoleInput) -> BirlikClientResult<BoardRole> {
        self.execute(self.authed(Method::POST, "/api/board-roles")?.json(input))
            .await
    }

    /// Полностью обновляет должность правления.
    pub async fn update_board_role(
        &self,
        id: i64,
        input: &BoardRoleInput,
    ) -> BirlikClientResult<BoardRole> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/board-roles/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет должность правления.
    pub async fn delete_board_role(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/board-roles/{id}"))?)
            .await
    }

    /// Создаёт члена правления.
    pub async fn create_board_member(
        &self,
        input: &BoardMemberInput,
    ) -> BirlikClientResult<BoardMember> {
        self.execute(self.authed(Method::POST, "/api/board-members")?.json(input))
            .await
    }

    /// Полностью обновляет члена правления.
    pub async fn update_board_member(
        &self,
        id: i64,
        input: &BoardMemberInput,
    ) -> BirlikClientResult<BoardMember> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/board-members/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет члена правления.
    pub async fn delete_board_member(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/board-members/{id}"))?)
            .await
    }

    /// Все объявления недвижимости (включая неопубликованные) с пагинацией.
    pub async fn admin_list_properties(
        &self,
        query: &PropertyListQuery,
    ) -> BirlikClientResult<Paginated<Property>> {
        self.execute(
            self.authed(Method::GET, "/api/properties/admin/all")?
                .query(query),
        )
        .await
    }

    /// Создаёт объявление недвижимости от имени администратора.
    pub async fn create_property(&self, input: &PropertyInput) -> BirlikClientResult<Property> {
        self.execute(self.authed(Method::POST, "/api/properties")?.json(input))
            .await
    }

    /// Полностью обновляет объявление недвижимости.
    pub async fn update_property(
        &self,
        id: i64,
        input: &PropertyInput,
    ) -> BirlikClientResult<Property> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/properties/{id}"))?
                .json(input),
        )
        .await
    }

    /// Удаляет объявление недвижимости.
    pub async fn delete_property(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/properties/{id}"))?)
            .await
    }

    /// Все статические страницы.
    pub async fn admin_pages(&self) -> BirlikClientResult<Vec<PageContent>> {
        self.execute(self.authed(Method::GET, "/api/pages")?).await
    }

    /// Создаёт статическую страницу.
    pub async fn create_page_content(
        &self,
        input: &PageContentInput,
    ) -> BirlikClientResult<PageContent> {
        self.execute(self.authed(Method::POST, "/api/pages")?.json(input))
            .await
    }

    /// Полностью обновляет статическую страницу.
    pub async fn update_page_content(
        &self,
        id: i64,
        input: &PageContentInput,
    ) -> BirlikClientResult<PageContent> {
        self.execute(self.authed(Method::PUT, &format!("/api/pages/{id}"))?.json(input))
            .await
    }

    /// Удаляет статическую страницу.
    pub async fn delete_page_content(&self, id: i64) -> BirlikClientResult<()> {
        self.execute_empty(self.authed(Method::DELETE, &format!("/api/pages/{id}"))?)
            .await
    }

    /// Обновляет настройки сайта.
    pub async fn update_site_settings(
        &self,
        input: &SiteSettingsInput,
    ) -> BirlikClientResult<SiteSettings> {
        self.execute(self.authed(Method::PUT, "/api/settings")?.json(input))
            .await
    }
}
