use common::page_selection::MatrixView;
use common::route_guard::RouteAccess;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::course_create_page::CourseCreatePage;
use crate::pages::course_detail_page::CourseDetailPage;
use crate::pages::course_invite_page::CourseInvitePage;
use crate::pages::create_custom_pdf_page::CreateCustomPdfPage;
use crate::pages::login_page::LoginPage;
use crate::pages::main_page::MainPage;
use crate::pages::my_custom_pdfs_page::MyCustomPdfsPage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::notifications_page::NotificationsPage;
use crate::pages::signup_page::SignupPage;
use crate::pages::week_material_page::WeekMaterialPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RouteGuard)]

    #[route("/login")]
    LoginPage {},

    #[route("/signup")]
    SignupPage {},

    #[route("/invite/:invite_code")]
    CourseInvitePage { invite_code: String },


    #[layout(Navbar)]

    #[route("/")]
    MainPage {},

    #[route("/courses/create")]
    CourseCreatePage {},

    #[route("/courses/:course_id")]
    CourseDetailPage { course_id: String },

    #[route("/courses/:course_id/week/:week")]
    WeekMaterialPage { course_id: String, week: u32 },

    #[route("/courses/:course_id/week/:week/create-custom/:view")]
    CreateCustomPdfPage { course_id: String, week: u32, view: UrlParam<MatrixView> },

    #[route("/my-custom-pdfs")]
    MyCustomPdfsPage {},

    #[route("/notifications")]
    NotificationsPage {},

    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::LoginPage {} | Route::SignupPage {} => RouteAccess::GuestOnly,
            Route::CourseInvitePage { .. } | Route::NotFoundPage { .. } => RouteAccess::Public,
            Route::CourseCreatePage {} => RouteAccess::ProfessorOnly,
            Route::CreateCustomPdfPage { .. } | Route::MyCustomPdfsPage {} => RouteAccess::StudentOnly,
            Route::MainPage {}
            | Route::CourseDetailPage { .. }
            | Route::WeekMaterialPage { .. }
            | Route::NotificationsPage {} => RouteAccess::Authenticated,
        }
    }

    pub fn create_custom_pdf(course_id: String, week: u32, view: MatrixView) -> Self {
        Self::CreateCustomPdfPage { course_id, week, view: UrlParam::from(view) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_restricted_screens() {
        assert_eq!(Route::CourseCreatePage {}.access(), RouteAccess::ProfessorOnly);
        assert_eq!(Route::MyCustomPdfsPage {}.access(), RouteAccess::StudentOnly);
        assert_eq!(
            Route::create_custom_pdf("c1".to_string(), 2, MatrixView::Slider).access(),
            RouteAccess::StudentOnly
        );
        assert_eq!(Route::LoginPage {}.access(), RouteAccess::GuestOnly);
        assert_eq!(Route::CourseInvitePage { invite_code: "X".to_string() }.access(), RouteAccess::Public);
    }

    #[test]
    fn view_mode_is_part_of_the_path() {
        let route = Route::create_custom_pdf("c1".to_string(), 3, MatrixView::Slider);
        let path = route.to_string();
        assert!(path.starts_with("/courses/c1/week/3/create-custom/"));
        assert_eq!(path.parse::<Route>().ok(), Some(route));
    }
}
