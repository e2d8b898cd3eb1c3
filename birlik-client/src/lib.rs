//! Клиентская библиотека для REST API портала ассоциации "Birlik".
//!
//! Предоставляет типизированный клиент (`BirlikClient`) поверх HTTP
//! (`reqwest`): по одному методу на операцию бэкенда, единый разбор
//! ошибок и общий конверт пагинации для списочных ответов.
//!
//! Клиент хранит bearer-токен после `register`/`login` и автоматически
//! использует его в защищённых операциях. Публичные чтения выполняются
//! без заголовка `Authorization`, даже если токен установлен.
#![warn(missing_docs)]

mod admin;
mod auth;
mod client;
mod contact;
mod content;
mod download;
mod error;
mod members;
mod models;

pub use client::BirlikClient;
pub use download::DocumentDownload;
pub use error::{BirlikClientError, BirlikClientResult};
pub use models::{
    Announcement, AnnouncementInput, AuthResponse, BoardMember, BoardMemberInput, BoardRole,
    BoardRoleInput, ContactMessage, ContactMessageInput, CurrentUser, Event, EventInput,
    HeroSlide, HeroSlideInput, HomeBanner, HomeBannerInput, Member, MemberDocument,
    MemberListQuery, MemberProfileInput, News, NewsInput, PageContent, PageContentInput,
    PageQuery, Paginated, Partner, PartnerInput, Property, PropertyInput, PropertyListQuery,
    Publication, PublicationInput, RecentQuery, RegisterRequest, ReviewDocumentInput,
    SiteSettings, SiteSettingsInput, SmsFeedback, SmsFeedbackInput, User, Video, VideoInput,
};
