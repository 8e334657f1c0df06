pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::catalog::requests::{CreateCategoryRequest, CreateSkillRequest};

super::define_service!(CatalogService);

impl CatalogService {
    pub async fn list_categories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_categories(self, request).await
    }

    pub async fn list_skills(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_skills(self, request).await
    }

    pub async fn list_countries(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_countries(self, request).await
    }

    // 教师新增分类
    pub async fn create_category(
        &self,
        body: CreateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_category(self, body, request).await
    }

    // 教师新增技能
    pub async fn create_skill(
        &self,
        body: CreateSkillRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_skill(self, body, request).await
    }
}
