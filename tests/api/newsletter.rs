use crate::helpers::spawn_app;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn newsletter_forwards_the_signup_to_the_newsletter_hook() {
    let app = spawn_app().await;

    Mock::given(path("/hooks/newsletter"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.crm_server)
        .await;

    let response = app.post_newsletter("email=jane%40example.com".into()).await;

    assert_eq!(200, response.status().as_u16());
    let bodies = app.crm_bodies().await;
    assert_eq!(
        bodies[0],
        serde_json::json!({
            "email": "jane@example.com",
            "source": "Oasis Website Newsletter",
            "tags": ["newsletter-signup", "website-visitor"],
            "customFields": {
                "signup_source": "Interactive 3D Website Newsletter"
            }
        })
    );
}

#[tokio::test]
async fn newsletter_returns_400_for_an_empty_or_invalid_email() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.crm_server)
        .await;

    let test_cases = vec![
        ("", "missing email"),
        ("email=", "empty email"),
        ("email=not-an-email", "invalid email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_newsletter(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn newsletter_fails_if_the_crm_rejects_the_signup() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.crm_server)
        .await;

    let response = app.post_newsletter("email=jane%40example.com".into()).await;

    assert_eq!(500, response.status().as_u16());
}
