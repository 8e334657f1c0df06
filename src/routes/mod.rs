pub mod assignments;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod certificates;
pub mod courses;
pub mod exams;
pub mod lessons;
pub mod orders;
pub mod reviews;
pub mod users;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use cart::configure_cart_routes;
pub use catalog::configure_catalog_routes;
pub use certificates::configure_certificate_routes;
pub use courses::configure_course_routes;
pub use exams::configure_exam_routes;
pub use lessons::configure_lesson_routes;
pub use orders::configure_order_routes;
pub use reviews::configure_review_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部业务路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_catalog_routes)
        .configure(configure_course_routes)
        .configure(configure_lesson_routes)
        .configure(configure_review_routes)
        .configure(configure_cart_routes)
        .configure(configure_order_routes)
        .configure(configure_exam_routes)
        .configure(configure_assignment_routes)
        .configure(configure_certificate_routes);
}
