use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::reviews;
use crate::errors::{MarketError, Result};
use crate::models::{
    PaginationInfo,
    common::pagination::normalize_page,
    reviews::{
        entities::Review,
        requests::{CreateReviewRequest, ReviewListQuery},
        responses::ReviewListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn list_reviews_impl(&self, query: ReviewListQuery) -> Result<ReviewListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Reviews::find();
        if let Some(course_id) = query.course_id {
            select = select.filter(reviews::Column::CourseId.eq(course_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(reviews::Column::StudentId.eq(student_id));
        }
        select = select.order_by_asc(reviews::Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| MarketError::database_operation(format!("查询评价总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| MarketError::database_operation(format!("查询评价页数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询评价列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_review())
            .collect();

        Ok(ReviewListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn get_review_impl(&self, id: i64) -> Result<Option<Review>> {
        let result = Reviews::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    pub async fn create_review_impl(
        &self,
        student_id: i64,
        req: CreateReviewRequest,
    ) -> Result<Review> {
        let model = reviews::ActiveModel {
            student_id: Set(student_id),
            course_id: Set(req.course_id),
            stars: Set(req.stars),
            comment: Set(req.comment),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建评价失败: {e}")))?;

        Ok(model.into_review())
    }

    pub async fn delete_review_impl(&self, id: i64) -> Result<bool> {
        let result = Reviews::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
