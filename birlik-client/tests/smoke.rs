use std::time::{SystemTime, UNIX_EPOCH};

use birlik_client::{
    BirlikClient, BirlikClientError, ContactMessageInput, MemberListQuery, NewsInput, PageQuery,
    PropertyInput, RegisterRequest,
};

fn base_url() -> String {
    std::env::var("BIRLIK_API_URL").unwrap_or_else(|_| "http://127.0.0.1:4000".to_string())
}

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server and database"]
async fn member_smoke_flow() {
    let mut client = BirlikClient::new(base_url());

    // Публичные чтения доступны без токена.
    let news = client
        .list_news(&PageQuery {
            page: Some(1),
            limit: Some(5),
        })
        .await
        .expect("list_news must succeed");
    assert!(news.items.len() <= 5);

    let settings = client.site_settings().await.expect("site_settings must succeed");
    assert!(settings.id > 0);

    let suffix = unique_suffix();
    let register = client
        .register(&RegisterRequest {
            email: format!("smoke_{suffix}@example.com"),
            password: "password123".to_string(),
            full_name: format!("Smoke User {suffix}"),
            company: Some("Smoke Ltd".to_string()),
            phone: None,
        })
        .await
        .expect("register must succeed");
    assert!(!register.token.is_empty());
    assert!(client.get_token().is_some());

    let me = client.me().await.expect("me must succeed");
    assert_eq!(me.user.id, register.user.id);

    let created = client
        .create_my_property(&PropertyInput {
            title: "smoke office".to_string(),
            description: "smoke description".to_string(),
            listing_type: "rent".to_string(),
            ..Default::default()
        })
        .await
        .expect("create_my_property must succeed");

    let mine = client.my_properties().await.expect("my_properties must succeed");
    assert!(mine.iter().any(|property| property.id == created.id));

    client
        .delete_my_property(created.id)
        .await
        .expect("delete_my_property must succeed");

    let uploaded = client
        .upload_document("tax-certificate", "smoke.pdf", "application/pdf", b"smoke")
        .await
        .expect("upload_document must succeed");

    let download = client
        .download_document(uploaded.id)
        .await
        .expect("download_document must succeed");
    assert_eq!(download.bytes, b"smoke");

    let submitted = client
        .submit_contact_message(&ContactMessageInput {
            name: "Smoke".to_string(),
            email: format!("smoke_{suffix}@example.com"),
            subject: None,
            message: "smoke message".to_string(),
        })
        .await
        .expect("submit_contact_message must succeed");
    assert_eq!(submitted.message, "smoke message");
}

#[tokio::test]
#[ignore = "requires running HTTP server, database and admin account"]
async fn admin_smoke_flow() {
    let email = std::env::var("BIRLIK_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let password =
        std::env::var("BIRLIK_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let mut client = BirlikClient::new(base_url());
    client.login(&email, &password).await.expect("login must succeed");

    let created = client
        .create_news(&NewsInput {
            title: "smoke news".to_string(),
            content: "smoke content".to_string(),
            image_url: None,
            published: false,
        })
        .await
        .expect("create_news must succeed");

    // Неопубликованная новость видна в административном списке...
    let all = client
        .admin_list_news(&PageQuery {
            page: Some(1),
            limit: Some(50),
        })
        .await
        .expect("admin_list_news must succeed");
    assert!(all.items.iter().any(|news| news.id == created.id));

    // ...но не в публичном.
    let public = client
        .list_news(&PageQuery {
            page: Some(1),
            limit: Some(50),
        })
        .await
        .expect("list_news must succeed");
    assert!(public.items.iter().all(|news| news.id != created.id));

    let mut input = NewsInput {
        title: "smoke news updated".to_string(),
        content: "smoke content".to_string(),
        image_url: None,
        published: true,
    };
    let updated = client
        .update_news(created.id, &input)
        .await
        .expect("update_news must succeed");
    assert_eq!(updated.title, "smoke news updated");

    input.published = false;
    client
        .update_news(created.id, &input)
        .await
        .expect("update_news must succeed");

    client.delete_news(created.id).await.expect("delete_news must succeed");

    let after_delete = client.get_news(created.id).await;
    assert!(matches!(after_delete, Err(BirlikClientError::NotFound(_))));

    let members = client
        .list_members(&MemberListQuery {
            page: Some(1),
            limit: Some(20),
            ..Default::default()
        })
        .await
        .expect("list_members must succeed");
    assert!(members.items.len() <= 20);
}
