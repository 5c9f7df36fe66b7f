mod account;
mod config;
mod form;
mod navigation;
mod template;

use std::sync::Arc;

use account::{AccountGateway, ConsoleGateway, Credentials, RegistrationRecord};
use actix_web::{error, web};
use actix_web::{App, HttpResponse, HttpServer, Responder, Result};
use askama::Template;
use form::controller::{FormController, FormKind};
use navigation::CurrentPath;

async fn login_ui(
    path: CurrentPath,
    query: web::Query<form::user::LoginQuery>,
) -> Result<HttpResponse> {
    let controller = FormController::new(FormKind::Login);

    let template =
        template::user::LoginTemplate::new(&path, controller.state(), query.registered.is_some())
            .render()
            .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(template))
}

async fn login(
    gateway: web::Data<dyn AccountGateway>,
    form: web::Form<form::user::LoginFormData>,
) -> Result<impl Responder> {
    let mut controller = FormController::new(FormKind::Login);
    form.into_inner().apply_to(&mut controller);

    // The login form has no submit checks.
    let state = controller
        .submit()
        .map_err(error::ErrorInternalServerError)?;

    gateway
        .sign_in(&Credentials::from_state(&state))
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::SeeOther()
        .append_header(("Location", "/"))
        .finish())
}

async fn register_ui(path: CurrentPath) -> Result<HttpResponse> {
    let controller = FormController::new(FormKind::Register);

    let template = template::user::RegisterTemplate::new(&path, controller.state())
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(template))
}

async fn register(
    path: CurrentPath,
    gateway: web::Data<dyn AccountGateway>,
    form: web::Form<form::user::RegisterFormData>,
) -> Result<impl Responder> {
    let mut controller = FormController::new(FormKind::Register);
    form.into_inner().apply_to(&mut controller);

    let state = match controller.submit() {
        Ok(state) => state,
        Err(rejection) => {
            log::debug!("registration rejected: {}", rejection);

            let template = template::user::RegisterTemplate::new(&path, controller.state())
                .with_alert(rejection.to_string())
                .render()
                .map_err(error::ErrorInternalServerError)?;

            return Ok(HttpResponse::UnprocessableEntity()
                .content_type("text/html")
                .body(template));
        }
    };

    gateway
        .register(&RegistrationRecord::from_state(&state))
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::SeeOther()
        .append_header(("Location", "/login?registered=1"))
        .finish())
}

async fn index(path: CurrentPath) -> actix_web::Result<impl Responder> {
    let template = template::IndexTemplate {
        nav: template::NavBar::new(&path),
    };

    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn default_handler(path: CurrentPath) -> Result<HttpResponse> {
    log::debug!("no route for {}", path.as_str());

    let template = template::error::NotFoundErrorTemplate {
        nav: template::NavBar::new(&path),
    };
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::NotFound()
        .content_type("text/html")
        .body(content))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .default_service(web::route().to(default_handler)),
    )
    .service(
        web::resource("/login")
            .route(web::get().to(login_ui))
            .route(web::post().to(login))
            .default_service(web::route().to(default_handler)),
    )
    .service(
        web::resource("/register")
            .route(web::get().to(register_ui))
            .route(web::post().to(register))
            .default_service(web::route().to(default_handler)),
    );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let gateway: Arc<dyn AccountGateway> = Arc::new(ConsoleGateway);

    log::info!(
        "starting HTTP server at http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(gateway.clone()))
            .wrap(actix_web::middleware::Logger::default())
            .default_service(web::route().to(default_handler))
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .workers(config.workers)
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGateway {
        registrations: Mutex<Vec<RegistrationRecord>>,
        sign_ins: Mutex<Vec<Credentials>>,
    }

    impl AccountGateway for RecordingGateway {
        fn register(&self, record: &RegistrationRecord) -> account::Result<()> {
            self.registrations.lock().unwrap().push(record.clone());
            Ok(())
        }

        fn sign_in(&self, credentials: &Credentials) -> account::Result<()> {
            self.sign_ins.lock().unwrap().push(credentials.clone());
            Ok(())
        }
    }

    struct FailingGateway;

    impl AccountGateway for FailingGateway {
        fn register(&self, _record: &RegistrationRecord) -> account::Result<()> {
            Err("backend unavailable".into())
        }

        fn sign_in(&self, _credentials: &Credentials) -> account::Result<()> {
            Err("backend unavailable".into())
        }
    }

    macro_rules! test_app {
        ($gateway:expr) => {{
            let gateway: Arc<dyn AccountGateway> = $gateway;
            test::init_service(
                App::new()
                    .app_data(web::Data::from(gateway))
                    .default_service(web::route().to(default_handler))
                    .configure(routes),
            )
            .await
        }};
    }

    fn registration(password: &str, confirm: &str) -> Vec<(&'static str, String)> {
        vec![
            ("fullname", "Jane Doe".to_string()),
            ("email", "jane@example.com".to_string()),
            ("password", password.to_string()),
            ("confirmPassword", confirm.to_string()),
        ]
    }

    fn body_text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn home_page_renders() {
        let app = test_app!(Arc::new(RecordingGateway::default()));

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = body_text(&test::read_body(res).await);
        assert!(body.contains("Welcome to Reauth"));
        assert!(body.contains("Create an account"));
    }

    #[actix_web::test]
    async fn unknown_path_renders_not_found() {
        let app = test_app!(Arc::new(RecordingGateway::default()));

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/does/not/exist").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body = body_text(&test::read_body(res).await);
        assert!(body.contains("Page not found!"));
        assert!(body.contains(r#"<a href="/">home</a>"#));
    }

    #[actix_web::test]
    async fn unrouted_method_renders_not_found() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = test_app!(gateway.clone());

        let requests = [
            test::TestRequest::post().uri("/"),
            test::TestRequest::delete().uri("/login"),
            test::TestRequest::put().uri("/register"),
        ];

        for req in requests {
            let res = test::call_service(&app, req.to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND);

            let body = body_text(&test::read_body(res).await);
            assert!(body.contains("Page not found!"));
        }

        assert!(gateway.registrations.lock().unwrap().is_empty());
        assert!(gateway.sign_ins.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn login_page_lists_inputs_and_one_submit() {
        let app = test_app!(Arc::new(RecordingGateway::default()));

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = body_text(&test::read_body(res).await);
        assert!(body.contains(r#"name="email""#));
        assert!(body.contains(r#"name="password""#));
        assert_eq!(body.matches(r#"type="submit""#).count(), 1);
        assert!(body.contains("Sign in"));
        assert!(!body.contains("you can now sign in"));
    }

    #[actix_web::test]
    async fn mismatched_registration_is_blocked_and_keeps_values() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = test_app!(gateway.clone());

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(registration("abc", "xyz"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_text(&test::read_body(res).await);
        assert!(body.contains(r#"role="alert""#));
        assert!(body.contains("Passwords don"));
        assert!(body.contains(r#"value="Jane Doe""#));
        assert!(body.contains(r#"value="jane@example.com""#));
        assert!(body.contains(r#"value="abc""#));
        assert!(body.contains(r#"value="xyz""#));
        assert!(gateway.registrations.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn matching_registration_is_handed_to_the_gateway() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = test_app!(gateway.clone());

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(registration("abc", "abc"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "/login?registered=1"
        );
        assert_eq!(
            *gateway.registrations.lock().unwrap(),
            vec![RegistrationRecord {
                fullname: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                password: "abc".to_string(),
                confirm_password: "abc".to_string(),
            }]
        );
    }

    #[actix_web::test]
    async fn registered_notice_follows_redirect() {
        let app = test_app!(Arc::new(RecordingGateway::default()));

        let req = test::TestRequest::get()
            .uri("/login?registered=1")
            .to_request();
        let body = body_text(&test::call_and_read_body(&app, req).await);

        assert!(body.contains("you can now sign in"));
    }

    #[actix_web::test]
    async fn login_submits_credentials() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = test_app!(gateway.clone());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form(vec![("email", "jane@example.com"), ("password", "abc")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");
        assert_eq!(
            *gateway.sign_ins.lock().unwrap(),
            vec![Credentials {
                email: "jane@example.com".to_string(),
                password: "abc".to_string(),
            }]
        );
    }

    #[actix_web::test]
    async fn missing_fields_default_to_empty() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = test_app!(gateway.clone());

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(vec![("fullname", "Jane Doe")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(gateway.registrations.lock().unwrap()[0].email, "");
    }

    #[actix_web::test]
    async fn gateway_failure_is_a_server_error() {
        let app = test_app!(Arc::new(FailingGateway));

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(registration("abc", "abc"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
