use super::SeaOrmStorage;
use crate::entity::certificates;
use crate::entity::prelude::*;
use crate::errors::{MarketError, Result};
use crate::models::certificates::{entities::Certificate, requests::IssueCertificateRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_certificates_impl(&self, student_id: i64) -> Result<Vec<Certificate>> {
        let result = Certificates::find()
            .filter(certificates::Column::StudentId.eq(student_id))
            .order_by_asc(certificates::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询证书列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_certificate()).collect())
    }

    pub async fn create_certificate_impl(
        &self,
        req: IssueCertificateRequest,
    ) -> Result<Certificate> {
        let model = certificates::ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            issued_at: Set(chrono::Utc::now().timestamp()),
            certificate_url: Set(req.certificate_url),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("颁发证书失败: {e}")))?;

        Ok(model.into_certificate())
    }
}
