/*!
 * 速率限制中间件
 *
 * 固定窗口计数：同一个键在一个窗口内超过上限时返回 429。
 * 键由端点前缀和客户端标识组成，已认证请求按用户 ID 计数，否则按 IP。
 *
 * ```rust,ignore
 * web::resource("/students/login")
 *     .wrap(RateLimit::login())
 *     .route(web::post().to(student_login))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};

/// 全局计数缓存，键: 前缀:标识:窗口序号
static RATE_LIMIT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(10 * 60))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    /// 窗口内允许的最大请求数
    max_requests: u32,
    /// 窗口长度（秒）
    window_secs: u64,
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs: window_secs.max(1),
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录：5 次/分钟
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 注册：3 次/分钟
    pub fn register() -> Self {
        Self::new(3, 60).with_prefix("register")
    }

    /// 刷新令牌：10 次/分钟
    pub fn refresh_token() -> Self {
        Self::new(10, 60).with_prefix("refresh")
    }

    fn cache_key(&self, identifier: &str, now_secs: u64) -> String {
        let window = now_secs / self.window_secs;
        if self.key_prefix.is_empty() {
            format!("{identifier}:{window}")
        } else {
            format!("{}:{identifier}:{window}", self.key_prefix)
        }
    }
}

/// 客户端 IP，优先取连接信息，其次是反向代理头
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // X-Forwarded-For 只取最靠近客户端的第一个地址
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<std::net::IpAddr>().is_ok()
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Request was throttled. Please try again later.",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            // 先释放 extensions 借用，connection_info() 需要可变借用
            let user_id = req.extensions().get::<User>().map(|user| user.id);
            let identifier = match user_id {
                Some(id) => format!("user:{id}"),
                None => format!("ip:{}", extract_client_ip(&req)),
            };

            let now_secs = chrono::Utc::now().timestamp().max(0) as u64;
            let cache_key = limit.cache_key(&identifier, now_secs);

            let current_count = RATE_LIMIT_CACHE.get(&cache_key).await.unwrap_or(0);
            if current_count >= limit.max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, limit.max_requests
                );
                let retry_after = limit.window_secs - now_secs % limit.window_secs;
                return Ok(req.into_response(
                    create_rate_limit_response(retry_after).map_into_right_body(),
                ));
            }

            RATE_LIMIT_CACHE.insert(cache_key, current_count + 1).await;

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_service, init_service};
    use actix_web::{App, HttpResponse, web};

    #[test]
    fn test_rate_limit_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let register = RateLimit::register();
        assert_eq!(register.max_requests, 3);

        let refresh = RateLimit::refresh_token();
        assert_eq!(refresh.max_requests, 10);
        assert_eq!(refresh.key_prefix, "refresh");
    }

    #[test]
    fn test_cache_key_changes_per_window() {
        let limit = RateLimit::new(1, 60).with_prefix("login");
        assert_eq!(limit.cache_key("ip:1.2.3.4", 59), "login:ip:1.2.3.4:0");
        assert_eq!(limit.cache_key("ip:1.2.3.4", 60), "login:ip:1.2.3.4:1");
    }

    #[actix_web::test]
    async fn test_requests_over_limit_are_throttled() {
        let app = init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimit::new(2, 3600).with_prefix("test-throttle"))
                    .route(web::get().to(HttpResponse::Ok)),
            ),
        )
        .await;

        for _ in 0..2 {
            let resp = call_service(&app, TestRequest::get().uri("/limited").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        let resp = call_service(&app, TestRequest::get().uri("/limited").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[actix_web::test]
    async fn test_single_anonymous_request_passes() {
        let app = init_service(
            App::new().service(
                web::resource("/login")
                    .wrap(RateLimit::login().with_prefix("test-anonymous"))
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let req = TestRequest::post()
            .uri("/login")
            .peer_addr("10.0.0.7:40000".parse().unwrap())
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
