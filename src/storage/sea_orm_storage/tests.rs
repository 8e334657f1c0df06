use super::SeaOrmStorage;
use crate::models::{
    Price,
    courses::{
        entities::{CourseDuration, Level},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    exams::{
        grading::grade_choices,
        requests::{ChoiceInput, CreateExamRequest, CreateQuestionRequest, UpdateQuestionRequest},
    },
    reviews::{
        rating::ReviewerCount,
        requests::{CreateReviewRequest, ReviewListQuery},
    },
    users::{
        entities::{StudentProfile, TeacherProfile, UserProfile},
        requests::CreateUserRequest,
    },
};
use crate::storage::Storage;

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::new_in_memory().await.unwrap()
}

fn student(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "hash".to_string(),
        first_name: None,
        last_name: None,
        profile: UserProfile::Student(StudentProfile {
            student_image: None,
            bio: None,
            grade_level: Level::Beginner,
            date_of_birth: None,
        }),
    }
}

fn teacher(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "hash".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
        profile: UserProfile::Teacher(TeacherProfile {
            profile_picture: None,
            bio: None,
            expertise: "Rust".to_string(),
            years_of_experience: 7,
            social_links: None,
        }),
    }
}

fn course(name: &str, category_id: i64, level: Level, cents: i64) -> CreateCourseRequest {
    CreateCourseRequest {
        course_name: name.to_string(),
        category_id,
        description: format!("About {name}"),
        price: Price::from_cents(cents),
        level,
        duration: CourseDuration::OneToFourWeeks,
        course_image: None,
        skill_ids: Vec::new(),
    }
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let storage = storage().await;
    let created = storage.create_user(student("alice_01")).await.unwrap();
    assert_eq!(created.username, "alice_01");

    let err = storage.create_user(student("alice_01")).await.unwrap_err();
    assert_eq!(err.code(), "E013");
}

#[tokio::test]
async fn test_user_profile_round_trip() {
    let storage = storage().await;
    let created = storage.create_user(teacher("teacher_01")).await.unwrap();

    let loaded = storage
        .get_user_by_username_or_email("teacher_01@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.id, created.id);
    match loaded.profile {
        UserProfile::Teacher(p) => assert_eq!(p.years_of_experience, 7),
        UserProfile::Student(_) => panic!("expected teacher profile"),
    }
}

#[tokio::test]
async fn test_refresh_token_revocation() {
    let storage = storage().await;
    let user = storage.create_user(student("revoker")).await.unwrap();

    assert!(!storage.is_refresh_token_revoked("jti-1").await.unwrap());
    storage
        .revoke_refresh_token("jti-1", user.id, 4_000_000_000)
        .await
        .unwrap();
    // 重复吊销不报错
    storage
        .revoke_refresh_token("jti-1", user.id, 4_000_000_000)
        .await
        .unwrap();
    assert!(storage.is_refresh_token_revoked("jti-1").await.unwrap());
    assert!(!storage.is_refresh_token_revoked("jti-2").await.unwrap());
}

#[tokio::test]
async fn test_purge_expired_revoked_tokens() {
    let storage = storage().await;
    let user = storage.create_user(student("purger")).await.unwrap();

    storage
        .revoke_refresh_token("old-jti", user.id, 1_000)
        .await
        .unwrap();
    storage
        .revoke_refresh_token("live-jti", user.id, 4_000_000_000)
        .await
        .unwrap();

    let removed = storage.purge_expired_revoked_tokens(2_000).await.unwrap();
    assert_eq!(removed, 1);
    assert!(!storage.is_refresh_token_revoked("old-jti").await.unwrap());
    assert!(storage.is_refresh_token_revoked("live-jti").await.unwrap());
}

#[tokio::test]
async fn test_cart_is_created_once() {
    let storage = storage().await;
    let user = storage.create_user(student("cart_user")).await.unwrap();

    let first = storage.get_or_create_cart(user.id).await.unwrap();
    let second = storage.get_or_create_cart(user.id).await.unwrap();
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn test_cart_total_follows_live_price() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_01")).await.unwrap();
    let buyer = storage.create_user(student("buyer_01")).await.unwrap();
    let category = storage.create_category("Programming").await.unwrap();

    let a = storage
        .create_course(owner.id, course("Rust", category.id, Level::Beginner, 10_000))
        .await
        .unwrap();
    let b = storage
        .create_course(owner.id, course("Go", category.id, Level::Beginner, 5_000))
        .await
        .unwrap();

    let cart = storage.get_or_create_cart(buyer.id).await.unwrap();
    storage.add_cart_item(cart.id, a.id).await.unwrap();
    storage.add_cart_item(cart.id, b.id).await.unwrap();

    let detail = storage.get_cart_detail(buyer.id).await.unwrap();
    assert_eq!(detail.total_price, Price::from_cents(15_000));

    storage
        .update_course(
            a.id,
            UpdateCourseRequest {
                price: Some(Price::from_cents(8_000)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let detail = storage.get_cart_detail(buyer.id).await.unwrap();
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.total_price, Price::from_cents(13_000));

    assert_eq!(storage.clear_cart(cart.id).await.unwrap(), 2);
    let detail = storage.get_cart_detail(buyer.id).await.unwrap();
    assert!(detail.items.is_empty());
    assert_eq!(detail.total_price, Price::ZERO);
}

#[tokio::test]
async fn test_cart_item_scoped_to_cart() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_02")).await.unwrap();
    let alice = storage.create_user(student("alice_02")).await.unwrap();
    let bob = storage.create_user(student("bob_0002")).await.unwrap();
    let category = storage.create_category("Design").await.unwrap();
    let c = storage
        .create_course(owner.id, course("Figma", category.id, Level::Beginner, 100))
        .await
        .unwrap();

    let alice_cart = storage.get_or_create_cart(alice.id).await.unwrap();
    let bob_cart = storage.get_or_create_cart(bob.id).await.unwrap();
    let item = storage.add_cart_item(alice_cart.id, c.id).await.unwrap();

    assert!(storage.get_cart_item(bob_cart.id, item.id).await.unwrap().is_none());
    assert!(!storage.delete_cart_item(bob_cart.id, item.id).await.unwrap());
    assert!(storage.delete_cart_item(alice_cart.id, item.id).await.unwrap());
}

#[tokio::test]
async fn test_course_filters_and_search() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_03")).await.unwrap();
    let programming = storage.create_category("Programming").await.unwrap();
    let design = storage.create_category("Design").await.unwrap();

    let rust = storage
        .create_course(owner.id, course("Rust Basics", programming.id, Level::Beginner, 100))
        .await
        .unwrap();
    storage
        .create_course(owner.id, course("Advanced Rust", programming.id, Level::Advanced, 100))
        .await
        .unwrap();
    storage
        .create_course(owner.id, course("UI Basics", design.id, Level::Beginner, 100))
        .await
        .unwrap();

    let filtered = storage
        .list_courses(CourseListQuery {
            page: 1,
            size: 20,
            category: Some(programming.id),
            level: Some(Level::Beginner),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.items.len(), 1);
    assert_eq!(filtered.items[0].id, rust.id);

    let searched = storage
        .list_courses(CourseListQuery {
            page: 1,
            size: 20,
            search: Some("rUsT".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<&str> = searched.items.iter().map(|c| c.course_name.as_str()).collect();
    assert_eq!(names, vec!["Rust Basics", "Advanced Rust"]);

    // 通配符按字面匹配
    let wildcard = storage
        .list_courses(CourseListQuery {
            page: 1,
            size: 20,
            search: Some("%".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(wildcard.items.is_empty());

    let all = storage.list_courses(CourseListQuery { page: 1, size: 2, ..Default::default() }).await.unwrap();
    assert_eq!(all.items.len(), 2);
    assert_eq!(all.pagination.total, 3);
    assert_eq!(all.pagination.total_pages, 2);
}

#[tokio::test]
async fn test_course_skills_filter() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_04")).await.unwrap();
    let category = storage.create_category("Programming").await.unwrap();
    let skill = storage.create_skill("Ownership").await.unwrap();

    let mut req = course("Rust", category.id, Level::Beginner, 100);
    req.skill_ids = vec![skill.id, skill.id];
    let with_skill = storage.create_course(owner.id, req).await.unwrap();
    storage
        .create_course(owner.id, course("Python", category.id, Level::Beginner, 100))
        .await
        .unwrap();

    let result = storage
        .list_courses(CourseListQuery {
            page: 1,
            size: 20,
            skills: Some(skill.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].id, with_skill.id);
    assert_eq!(result.items[0].skills.len(), 1);
}

#[tokio::test]
async fn test_course_rating_counts_null_stars() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_05")).await.unwrap();
    let category = storage.create_category("Programming").await.unwrap();
    let c = storage
        .create_course(owner.id, course("Rust", category.id, Level::Beginner, 100))
        .await
        .unwrap();

    let empty = storage.get_course_detail(c.id).await.unwrap().unwrap();
    assert_eq!(empty.course.avg_rating, 0.0);
    assert_eq!(empty.course.total_people, ReviewerCount::Exact(0));

    for (i, stars) in [Some(5), Some(5), None, Some(3)].into_iter().enumerate() {
        let reviewer = storage
            .create_user(student(&format!("reviewer_{i}")))
            .await
            .unwrap();
        storage
            .create_review(
                reviewer.id,
                CreateReviewRequest {
                    course_id: c.id,
                    stars,
                    comment: None,
                },
            )
            .await
            .unwrap();
    }

    let detail = storage.get_course_detail(c.id).await.unwrap().unwrap();
    assert_eq!(detail.course.avg_rating, 3.3);
    assert_eq!(detail.course.total_people, ReviewerCount::Exact(4));
    assert_eq!(detail.reviews.len(), 4);
    assert_eq!(detail.teacher.years_of_experience, 7);
}

#[tokio::test]
async fn test_review_listing_and_delete() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_06")).await.unwrap();
    let author = storage.create_user(student("author_01")).await.unwrap();
    let category = storage.create_category("Programming").await.unwrap();
    let c = storage
        .create_course(owner.id, course("Rust", category.id, Level::Beginner, 100))
        .await
        .unwrap();

    let review = storage
        .create_review(
            author.id,
            CreateReviewRequest {
                course_id: c.id,
                stars: Some(4),
                comment: Some("good".to_string()),
            },
        )
        .await
        .unwrap();

    let listed = storage
        .list_reviews(ReviewListQuery {
            page: 1,
            size: 20,
            course_id: Some(c.id),
            student_id: None,
        })
        .await
        .unwrap();
    assert_eq!(listed.items.len(), 1);
    assert_eq!(listed.items[0].student_id, author.id);

    assert!(storage.delete_review(review.id).await.unwrap());
    assert!(storage.get_review(review.id).await.unwrap().is_none());
    assert!(!storage.delete_review(review.id).await.unwrap());
}

#[tokio::test]
async fn test_enrollment_is_idempotent() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_07")).await.unwrap();
    let learner = storage.create_user(student("learner_1")).await.unwrap();
    let category = storage.create_category("Programming").await.unwrap();
    let c = storage
        .create_course(owner.id, course("Rust", category.id, Level::Beginner, 100))
        .await
        .unwrap();

    assert!(storage.enroll_student(c.id, learner.id).await.unwrap());
    assert!(!storage.enroll_student(c.id, learner.id).await.unwrap());

    let detail = storage.get_teacher_course_detail(c.id).await.unwrap().unwrap();
    assert_eq!(detail.students.len(), 1);
    assert_eq!(detail.students[0].username, "learner_1");
}

#[tokio::test]
async fn test_delete_course_cascades() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_08")).await.unwrap();
    let buyer = storage.create_user(student("buyer_08")).await.unwrap();
    let category = storage.create_category("Programming").await.unwrap();
    let c = storage
        .create_course(owner.id, course("Rust", category.id, Level::Beginner, 100))
        .await
        .unwrap();
    let cart = storage.get_or_create_cart(buyer.id).await.unwrap();
    storage.add_cart_item(cart.id, c.id).await.unwrap();

    assert!(storage.delete_course(c.id).await.unwrap());
    assert!(storage.get_course_by_id(c.id).await.unwrap().is_none());
    assert!(storage.list_cart_items(cart.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_answers_are_frozen_after_choice_edit() {
    let storage = storage().await;
    let owner = storage.create_user(teacher("owner_09")).await.unwrap();
    let learner = storage.create_user(student("learner_9")).await.unwrap();
    let category = storage.create_category("Programming").await.unwrap();
    let c = storage
        .create_course(owner.id, course("Rust", category.id, Level::Beginner, 100))
        .await
        .unwrap();
    let exam = storage
        .create_exam(
            owner.id,
            CreateExamRequest {
                course_id: c.id,
                exam_name: "Midterm".to_string(),
                passing_score: Some(60),
                duration: 30,
            },
        )
        .await
        .unwrap();

    let question = storage
        .create_question(
            exam.id,
            CreateQuestionRequest {
                text: "Which are integers?".to_string(),
                choices: vec![
                    ChoiceInput { text: "i32".to_string(), is_correct: true },
                    ChoiceInput { text: "u8".to_string(), is_correct: true },
                    ChoiceInput { text: "f64".to_string(), is_correct: false },
                ],
            },
        )
        .await
        .unwrap();
    assert_eq!(question.choices.len(), 3);

    let ids: Vec<i64> = question.choices.iter().filter(|c| c.is_correct).map(|c| c.id).collect();
    let graded = grade_choices(&question.choices, &ids).unwrap();
    let answer = storage
        .create_answer(learner.id, question.id, None, graded)
        .await
        .unwrap();
    assert_eq!(answer.is_correct, Some(true));
    assert_eq!(answer.selected_choices.len(), 2);

    let updated = storage
        .update_question(
            question.id,
            UpdateQuestionRequest {
                text: None,
                choices: Some(vec![ChoiceInput { text: "bool".to_string(), is_correct: true }]),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.choices.len(), 1);

    let answers = storage.list_answers(learner.id, Some(exam.id)).await.unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].is_correct, Some(true));

    let detail = storage.get_exam_detail(exam.id).await.unwrap().unwrap();
    assert_eq!(detail.questions.len(), 1);
    assert!(storage.list_answers(learner.id, Some(exam.id + 1)).await.unwrap().is_empty());
}
