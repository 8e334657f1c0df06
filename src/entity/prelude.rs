//! 预导入模块，方便使用

pub use super::assignment_submissions::{
    ActiveModel as SubmissionActiveModel, Entity as AssignmentSubmissions,
    Model as SubmissionModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::cart_items::{
    ActiveModel as CartItemActiveModel, Entity as CartItems, Model as CartItemModel,
};
pub use super::carts::{ActiveModel as CartActiveModel, Entity as Carts, Model as CartModel};
pub use super::categories::{
    ActiveModel as CategoryActiveModel, Entity as Categories, Model as CategoryModel,
};
pub use super::certificates::{
    ActiveModel as CertificateActiveModel, Entity as Certificates, Model as CertificateModel,
};
pub use super::choices::{ActiveModel as ChoiceActiveModel, Entity as Choices, Model as ChoiceModel};
pub use super::countries::{
    ActiveModel as CountryActiveModel, Entity as Countries, Model as CountryModel,
};
pub use super::course_languages::{
    ActiveModel as CourseLanguageActiveModel, Entity as CourseLanguages,
    Model as CourseLanguageModel,
};
pub use super::course_skills::{
    ActiveModel as CourseSkillActiveModel, Entity as CourseSkills, Model as CourseSkillModel,
};
pub use super::course_students::{
    ActiveModel as CourseStudentActiveModel, Entity as CourseStudents,
    Model as CourseStudentModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::lessons::{ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel};
pub use super::orders::{ActiveModel as OrderActiveModel, Entity as Orders, Model as OrderModel};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::reviews::{ActiveModel as ReviewActiveModel, Entity as Reviews, Model as ReviewModel};
pub use super::revoked_tokens::{
    ActiveModel as RevokedTokenActiveModel, Entity as RevokedTokens, Model as RevokedTokenModel,
};
pub use super::skills::{ActiveModel as SkillActiveModel, Entity as Skills, Model as SkillModel};
pub use super::student_answer_choices::{
    ActiveModel as StudentAnswerChoiceActiveModel, Entity as StudentAnswerChoices,
    Model as StudentAnswerChoiceModel,
};
pub use super::student_answers::{
    ActiveModel as StudentAnswerActiveModel, Entity as StudentAnswers,
    Model as StudentAnswerModel,
};
pub use super::student_profiles::{
    ActiveModel as StudentProfileActiveModel, Entity as StudentProfiles,
    Model as StudentProfileModel,
};
pub use super::teacher_profiles::{
    ActiveModel as TeacherProfileActiveModel, Entity as TeacherProfiles,
    Model as TeacherProfileModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
