//! Upload page: multipart video publish form.

use leptos::prelude::*;

use crate::util::notify;

#[component]
pub fn UploadPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);
    let video_ref = NodeRef::<leptos::html::Input>::new();
    let thumbnail_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get() {
            return;
        }
        if title.get().trim().is_empty() || description.get().trim().is_empty() {
            notify::alert("Please fill in all fields and select files.");
            return;
        }

        #[cfg(feature = "csr")]
        {
            let video_file = video_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let thumbnail_file = thumbnail_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let (Some(video_file), Some(thumbnail_file)) = (video_file, thumbnail_file) else {
                notify::alert("Please fill in all fields and select files.");
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_str("title", title.get().trim());
            let _ = form.append_with_str("description", description.get().trim());
            let _ = form.append_with_blob("videoFile", &video_file);
            let _ = form.append_with_blob("thumbnail", &thumbnail_file);

            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::videos::upload(&form).await {
                    Ok(_) => {
                        notify::alert("Video uploaded successfully!");
                        title.set(String::new());
                        description.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("upload failed: {err}");
                        notify::alert("Upload failed. Please try again.");
                    }
                }
                uploading.set(false);
            });
        }
    };

    view! {
        <div class="form-page">
            <form class="form-card" on:submit=on_submit>
                <h2>"Upload a Video"</h2>

                <label class="form-card__label">
                    "Title"
                    <input
                        class="form-card__input"
                        type="text"
                        required=true
                        placeholder="Enter video title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-card__label">
                    "Description"
                    <textarea
                        class="form-card__input"
                        rows="4"
                        required=true
                        placeholder="Write a short description..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form-card__label">
                    "Video File"
                    <input
                        class="form-card__file"
                        type="file"
                        accept="video/*"
                        required=true
                        node_ref=video_ref
                    />
                </label>

                <label class="form-card__label">
                    "Thumbnail Image"
                    <input
                        class="form-card__file"
                        type="file"
                        accept="image/*"
                        required=true
                        node_ref=thumbnail_ref
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload Video" }}
                </button>
            </form>
        </div>
    }
}
