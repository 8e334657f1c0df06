use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{cart_items, carts, courses};
use crate::errors::{MarketError, Result};
use crate::models::{
    Price,
    carts::entities::{Cart, CartDetail, CartItem},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 为条目填充课程名与课程当前价格
    async fn price_cart_items(&self, items: Vec<CartItemModel>) -> Result<Vec<CartItem>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let course_ids: Vec<i64> = items.iter().map(|i| i.course_id).collect();
        let course_map: HashMap<i64, CourseModel> = Courses::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(items
            .into_iter()
            .filter_map(|item| {
                // 课程删除时条目级联删除，这里只会跳过并发删除的情况
                course_map.get(&item.course_id).map(|course| CartItem {
                    id: item.id,
                    cart_id: item.cart_id,
                    course_id: item.course_id,
                    course_name: course.course_name.clone(),
                    price: Price::from_cents(course.price_cents),
                })
            })
            .collect())
    }

    pub async fn get_or_create_cart_impl(&self, student_id: i64) -> Result<Cart> {
        let model = carts::ActiveModel {
            student_id: Set(student_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        Carts::insert(model)
            .on_conflict(
                OnConflict::column(carts::Column::StudentId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("创建购物车失败: {e}")))?;

        Carts::find()
            .filter(carts::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询购物车失败: {e}")))?
            .map(|m| m.into_cart())
            .ok_or_else(|| MarketError::not_found(format!("学生 {student_id} 的购物车不存在")))
    }

    pub async fn get_cart_detail_impl(&self, student_id: i64) -> Result<CartDetail> {
        let cart = self.get_or_create_cart_impl(student_id).await?;
        let items = self.list_cart_items_impl(cart.id).await?;
        Ok(CartDetail::new(cart, items))
    }

    pub async fn list_cart_items_impl(&self, cart_id: i64) -> Result<Vec<CartItem>> {
        let items = CartItems::find()
            .filter(cart_items::Column::CartId.eq(cart_id))
            .order_by_asc(cart_items::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询购物车条目失败: {e}")))?;

        self.price_cart_items(items).await
    }

    pub async fn get_cart_item_impl(&self, cart_id: i64, item_id: i64) -> Result<Option<CartItem>> {
        let item = CartItems::find_by_id(item_id)
            .filter(cart_items::Column::CartId.eq(cart_id))
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询购物车条目失败: {e}")))?;

        match item {
            Some(item) => Ok(self.price_cart_items(vec![item]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn add_cart_item_impl(&self, cart_id: i64, course_id: i64) -> Result<CartItem> {
        let model = cart_items::ActiveModel {
            cart_id: Set(cart_id),
            course_id: Set(course_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("添加购物车条目失败: {e}")))?;

        self.price_cart_items(vec![model])
            .await?
            .pop()
            .ok_or_else(|| MarketError::not_found(format!("课程 {course_id} 不存在")))
    }

    pub async fn update_cart_item_impl(
        &self,
        cart_id: i64,
        item_id: i64,
        course_id: i64,
    ) -> Result<Option<CartItem>> {
        let Some(existing) = CartItems::find_by_id(item_id)
            .filter(cart_items::Column::CartId.eq(cart_id))
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询购物车条目失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.course_id = Set(course_id);
        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("更新购物车条目失败: {e}")))?;

        Ok(self.price_cart_items(vec![updated]).await?.pop())
    }

    pub async fn delete_cart_item_impl(&self, cart_id: i64, item_id: i64) -> Result<bool> {
        let result = CartItems::delete_many()
            .filter(cart_items::Column::Id.eq(item_id))
            .filter(cart_items::Column::CartId.eq(cart_id))
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除购物车条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn clear_cart_impl(&self, cart_id: i64) -> Result<u64> {
        let result = CartItems::delete_many()
            .filter(cart_items::Column::CartId.eq(cart_id))
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("清空购物车失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
