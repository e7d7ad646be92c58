//! DOM bindings for the effect models in `lib_core::model`.
//!
//! - [`DomContainer`] implements [`Container`] over a real element
//! - [`start_animation`] runs an [`AnimationSpec`] through the Web Animations
//!   API; [`finished`] and [`animate`] resolve when it completes
//! - [`viewport`], [`anchor_rect`], [`seeded_rng`] feed the models with
//!   browser measurements and randomness

use js_sys::Object;
use lib_core::error::{AppError, Result};
use lib_core::model::{AnimationSpec, Container, Point, Rect, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Animation, Element, HtmlElement, KeyframeAnimationOptions};

use crate::utils::constants::FALLBACK_VIEWPORT;

/// Convert a thrown JS value into [`AppError::Dom`].
pub fn js_error(err: JsValue) -> AppError {
    AppError::Dom(format!("{:?}", err))
}

/// Element that effect nodes are attached to.
#[derive(Clone)]
pub struct DomContainer {
    element: HtmlElement,
}

impl DomContainer {
    pub fn new(element: impl Into<HtmlElement>) -> Self {
        Self {
            element: element.into(),
        }
    }

    /// Container over `document.body`, used by the click burst.
    pub fn body() -> Option<Self> {
        web_sys::window()?.document()?.body().map(Self::new)
    }
}

impl Container for DomContainer {
    type Node = HtmlElement;

    fn clear(&self) -> Result<()> {
        self.element.set_inner_html("");
        Ok(())
    }

    fn append(&self, class_name: &str, style: &str) -> Result<HtmlElement> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| AppError::Dom("container is detached from any document".to_string()))?;
        let node = document.create_element("div").map_err(js_error)?;
        node.set_class_name(class_name);
        node.set_attribute("style", style).map_err(js_error)?;
        self.element.append_child(&node).map_err(js_error)?;
        node.dyn_into::<HtmlElement>()
            .map_err(|_| AppError::Dom("created node is not an HtmlElement".to_string()))
    }

    fn remove(&self, node: &HtmlElement) -> Result<()> {
        node.remove();
        Ok(())
    }

    fn len(&self) -> usize {
        self.element.child_element_count() as usize
    }
}

/// Current `innerWidth` x `innerHeight`.
pub fn viewport() -> Viewport {
    let measured = web_sys::window().and_then(|w| {
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        Some(Viewport::new(width, height))
    });
    measured.unwrap_or(Viewport::new(FALLBACK_VIEWPORT.0, FALLBACK_VIEWPORT.1))
}

/// Bounding box of an anchor element in viewport coordinates.
pub fn anchor_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Fresh generator seeded from `Math.random()`.
///
/// `fastrand::Rng::new()` would seed from the clock, which is unavailable on
/// `wasm32-unknown-unknown`.
pub fn seeded_rng() -> fastrand::Rng {
    fastrand::Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Move an absolutely positioned node.
pub fn place(node: &HtmlElement, position: Point) -> Result<()> {
    let style = node.style();
    style
        .set_property("left", &format!("{}px", position.x))
        .map_err(js_error)?;
    style
        .set_property("top", &format!("{}px", position.y))
        .map_err(js_error)?;
    Ok(())
}

/// Start `spec` on `node` and return the running animation.
pub fn start_animation(node: &HtmlElement, spec: &AnimationSpec) -> Result<Animation> {
    let keyframes = serde_wasm_bindgen::to_value(&spec.keyframes)
        .map_err(|err| AppError::Serialization(err.to_string()))?
        .dyn_into::<Object>()
        .map_err(|_| {
            AppError::Serialization("keyframes did not serialize to an array".to_string())
        })?;

    let options = KeyframeAnimationOptions::new();
    options.set_duration(spec.options.duration);
    options.set_easing(spec.options.easing);

    Ok(node.animate_with_keyframe_animation_options(Some(&keyframes), &options))
}

/// Wait for `animation` to finish.
///
/// Resolves with an error if the animation is cancelled first.
pub async fn finished(animation: &Animation) -> Result<()> {
    let promise = animation.finished().map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

/// Run `spec` on `node` and wait for it to finish.
pub async fn animate(node: &HtmlElement, spec: &AnimationSpec) -> Result<()> {
    let animation = start_animation(node, spec)?;
    finished(&animation).await
}
