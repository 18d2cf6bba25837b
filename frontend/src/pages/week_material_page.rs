use common::{
    material::{MaterialSort, WeekMaterials},
    validation::{validate_deadline, validate_upload_file_name},
};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gateway::{ApiError, api::{courses, materials}};

use crate::api::api_handle::{use_api, use_api_resource};
use crate::components::material_list::MaterialList;
use crate::components::page_header::PageHeader;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::data_definitions::feature_config::use_feature_config;
use crate::data_definitions::session_state::use_session_state;
use crate::routes::Route;


#[component]
pub fn WeekMaterialPage(course_id: String, week: u32) -> Element {
    rsx! {
        Title { "Week {week}" }
        WeekMaterialRoot { course_id, week }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WeekContext {
    course_id: ReadSignal<String>,
    week: ReadSignal<u32>,
    /// Refetches the week after an upload or a deadline change.
    reload: Callback<()>,
}

#[component]
fn WeekMaterialRoot(course_id: ReadSignal<String>, week: ReadSignal<u32>) -> Element {
    let sort = use_signal(MaterialSort::default);
    let mut data = use_api_resource("Could not load this week's material.", move |client| {
        let (course_id, week, sort) = (course_id(), week(), sort());
        async move { courses::week_materials(&client, &course_id, week, sort).await }
    });
    let reload = use_callback(move |_: ()| data.restart());
    use_context_provider(|| WeekContext { course_id, week, reload });

    match &*data.read() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(_)) => rsx! {
            EmptyState {
                message: "This week could not be loaded.",
                Link { to: Route::CourseDetailPage { course_id: course_id() }, "Back to the course" }
            }
        },
        Some(Ok(materials)) => rsx! { WeekMaterialView { materials: materials.clone(), sort } },
    }
}

#[component]
fn WeekMaterialView(materials: WeekMaterials, sort: Signal<MaterialSort>) -> Element {
    let ctx = use_context::<WeekContext>();
    let session = use_session_state();
    let features = use_feature_config();
    let user = session.session();
    let is_student = user.as_ref().is_some_and(|u| u.is_student());
    let is_professor = user.as_ref().is_some_and(|u| u.is_professor());
    let course = materials.course.clone();
    let week = (ctx.week)();
    let has_student_notes = !materials.student_materials.is_empty();

    let open_editor = move |_| {
        let view = features.default_matrix_view;
        navigator().push(Route::create_custom_pdf((ctx.course_id)(), (ctx.week)(), view));
    };

    rsx! {
        PageHeader {
            title: format!("Week {week} material"),
            subtitle: materials.upload_deadline.as_ref().map(|d| format!("Upload deadline: {d}")).unwrap_or_default(),
            Link { to: Route::MainPage {}, "Home" }
            ">"
            Link { to: Route::CourseDetailPage { course_id: course.course_id.clone() }, "{course.course_name}" }
            ">"
            span { "Week {week}" }
        }

        if materials.can_upload {
            UploadPanel {}
        } else {
            EmptyState { message: "Uploads are closed for this week." }
        }
        if is_professor && features.upload_deadlines {
            DeadlinePanel { current: materials.upload_deadline.clone().unwrap_or_default() }
        }

        Section {
            title: "Professor material",
            MaterialList {
                materials: materials.professor_materials.clone(),
                show_stats: false,
                empty_message: "No professor material has been uploaded yet.",
            }
        }

        Section {
            title: "Student notes",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px; margin-bottom: 12px;",
                SortSelect { sort }
                div { style: "flex-grow: 1;" }
                if is_student && has_student_notes && materials.can_view {
                    button {
                        class: "course-button",
                        style: "background-color: #10B981; border-color: #10B981;",
                        onclick: open_editor,
                        "Build my own notes"
                    }
                }
            }
            if materials.can_view {
                MaterialList {
                    materials: materials.student_materials.clone(),
                    show_stats: true,
                    empty_message: if is_student { "No student notes yet. Be the first to share yours!".to_string() } else { "No student notes yet.".to_string() },
                }
            } else {
                EmptyState { message: "Student notes for this week are not visible to you yet." }
            }
        }
    }
}

#[component]
fn Section(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "margin-top: 24px;",
            h2 { style: "margin: 0px 0px 12px 0px;", "{title}" }
            {children}
        }
    }
}

#[component]
fn SortSelect(sort: Signal<MaterialSort>) -> Element {
    let mut sort = sort;
    rsx! {
        label { "Sort by " }
        select {
            class: "course-input",
            style: "width: fit-content;",
            value: "{sort}",
            onchange: move |e| match e.value().parse::<MaterialSort>() {
                Ok(value) => sort.set(value),
                Err(e) => tracing::warn!("{e}"),
            },
            for option_sort in MaterialSort::ALL {
                option { key: "{option_sort}", value: "{option_sort}", "{option_sort.label()}" }
            }
        }
    }
}

#[component]
fn UploadPanel() -> Element {
    let ctx = use_context::<WeekContext>();
    let api = use_api();
    let mut picked = use_signal(|| None::<(String, Vec<u8>)>);
    let mut uploading = use_signal(|| false);

    let pick = move |e: FormEvent| async move {
        let Some(file) = e.files().into_iter().next() else {
            picked.set(None);
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => picked.set(Some((name, bytes.to_vec()))),
            Err(e) => {
                tracing::warn!("could not read {name}: {e}");
                picked.set(None);
                api.toasts().danger(format!("Could not read {name}."));
            }
        }
    };

    let upload = move |e: FormEvent| {
        e.prevent_default();
        let file = picked.peek().clone();
        if let Err(e) = validate_upload_file_name(file.as_ref().map(|(name, _)| name.as_str())) {
            return api.report_error(&ApiError::from(e), "");
        }
        let Some((name, bytes)) = file else { return };
        let client = api.client();
        let (course_id, week) = ((ctx.course_id)(), (ctx.week)());
        uploading.set(true);
        spawn(async move {
            match materials::upload_material(&client, &course_id, week, &name, bytes).await {
                Ok(response) => {
                    api.toasts().success(response.message.unwrap_or_else(|| "Upload complete.".to_string()));
                    picked.set(None);
                    ctx.reload.call(());
                }
                Err(e) => api.report_error(&e, "Upload failed."),
            }
            uploading.set(false);
        });
    };

    rsx! {
        form {
            style: "
                background-color: white;
                border: 2px dashed #A4B3D6;
                border-radius: 10px;
                padding: 20px;
                display: flex;
                flex-direction: column;
                gap: 12px;
                align-items: flex-start;
            ",
            onsubmit: upload,
            div { style: "font-weight: bold;", "Upload a PDF" }
            input { r#type: "file", accept: ".pdf,application/pdf", onchange: pick }
            button {
                class: "course-button",
                r#type: "submit",
                disabled: uploading(),
                if uploading() { "Uploading..." } else { "Upload" }
            }
        }
    }
}

#[component]
fn DeadlinePanel(current: String) -> Element {
    let ctx = use_context::<WeekContext>();
    let api = use_api();
    let mut deadline = use_signal(|| current.clone());
    let mut saving = use_signal(|| false);

    let save = move |e: FormEvent| {
        e.prevent_default();
        let value = match validate_deadline(&deadline.read()) {
            Ok(value) => value,
            Err(e) => return api.report_error(&ApiError::from(e), ""),
        };
        let client = api.client();
        let (course_id, week) = ((ctx.course_id)(), (ctx.week)());
        saving.set(true);
        spawn(async move {
            match courses::set_upload_deadline(&client, &course_id, week, &value).await {
                Ok(response) => {
                    api.toasts().success(response.message.unwrap_or_else(|| "Deadline saved.".to_string()));
                    ctx.reload.call(());
                }
                Err(e) => api.report_error(&e, "Could not save the deadline."),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            style: "
                margin-top: 14px;
                background-color: white;
                border: 1px solid #DADDE3;
                border-radius: 10px;
                padding: 16px;
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
            ",
            onsubmit: save,
            label { "Upload deadline" }
            input {
                class: "course-input",
                style: "width: fit-content;",
                r#type: "datetime-local",
                value: "{deadline}",
                oninput: move |e| deadline.set(e.value()),
            }
            button {
                class: "course-button",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save deadline" }
            }
        }
    }
}
