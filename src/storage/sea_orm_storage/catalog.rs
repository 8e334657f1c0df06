use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{categories, countries, skills};
use crate::errors::{MarketError, Result};
use crate::models::catalog::entities::{Category, Country, Skill};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_categories_impl(&self) -> Result<Vec<Category>> {
        let result = Categories::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询分类失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_category()).collect())
    }

    pub async fn get_category_impl(&self, id: i64) -> Result<Option<Category>> {
        let result = Categories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询分类失败: {e}")))?;

        Ok(result.map(|m| m.into_category()))
    }

    pub async fn create_category_impl(&self, name: &str) -> Result<Category> {
        let model = categories::ActiveModel {
            category_name: Set(name.trim().to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建分类失败: {e}")))?;

        Ok(model.into_category())
    }

    pub async fn list_skills_impl(&self) -> Result<Vec<Skill>> {
        let result = Skills::find()
            .order_by_asc(skills::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询技能失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_skill()).collect())
    }

    pub async fn create_skill_impl(&self, name: &str) -> Result<Skill> {
        let model = skills::ActiveModel {
            skill_name: Set(name.trim().to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建技能失败: {e}")))?;

        Ok(model.into_skill())
    }

    pub async fn list_countries_impl(&self) -> Result<Vec<Country>> {
        let result = Countries::find()
            .order_by_asc(countries::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询国家失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_country()).collect())
    }

    pub async fn get_country_impl(&self, id: i64) -> Result<Option<Country>> {
        let result = Countries::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询国家失败: {e}")))?;

        Ok(result.map(|m| m.into_country()))
    }
}
