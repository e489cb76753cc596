#[allow(unused_imports)]
use log::{debug, error, info};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::*;

use crate::app::App;
use crate::components::{input_source_id, Hand};
use crate::config::SceneConfig;
use crate::logging::{init_logging, printlog};
use crate::math::{Quat, UnitQuat, UnitQuatf, Vec3f};

// Squeeze is button 1 in the xr-standard gamepad mapping.
const SQUEEZE_BUTTON: u32 = 1;

fn request_animation_frame(session: &XrSession, f: &Closure<dyn FnMut(f64, XrFrame)>) -> u32 {
    // This turns the Closure into a js_sys::Function
    // See https://rustwasm.github.io/wasm-bindgen/api/wasm_bindgen/closure/struct.Closure.html#casting-a-closure-to-a-js_sysfunction
    session.request_animation_frame(f.as_ref().unchecked_ref())
}

// Decomposed position and orientation are easier to work with than the matrix.
fn to_pose(transform: &XrRigidTransform) -> (Vec3f, UnitQuatf) {
    let p = transform.position();
    let o = transform.orientation();
    let position = Vec3f::new(p.x() as f32, p.y() as f32, p.z() as f32);
    let rotation = UnitQuat::new_normalize(Quat::new(o.w() as f32, o.x() as f32, o.y() as f32, o.z() as f32));
    (position, rotation)
}

fn controller_id(source: &XrInputSource, index: u32) -> String {
    let hand = match source.handedness() {
        XrHandedness::Left => Some(Hand::Left),
        XrHandedness::Right => Some(Hand::Right),
        _ => None,
    };
    input_source_id(hand, index)
}

fn squeeze_pressed(source: &XrInputSource) -> bool {
    source
        .gamepad()
        .and_then(|gamepad| gamepad.buttons().get(SQUEEZE_BUTTON).dyn_into::<GamepadButton>().ok())
        .map(|button| button.pressed())
        .unwrap_or(false)
}

fn create_webgl_context() -> Result<WebGl2RenderingContext, JsValue> {
    let canvas = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("canvas"))
        .ok_or_else(|| JsValue::from_str("no #canvas element"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let gl_attribs = Object::new();
    Reflect::set(
        &gl_attribs,
        &JsValue::from_str("xrCompatible"),
        &JsValue::TRUE,
    )?;

    let gl = canvas
        .get_context_with_context_options("webgl2", &gl_attribs)?
        .ok_or_else(|| JsValue::from_str("webgl2 unavailable"))?
        .dyn_into()?;
    Ok(gl)
}

/// Immersive session that forwards head pose and controller input to an [`App`].
/// Drawing is left to whoever owns the canvas.
pub struct WebXRApp {
    session: XrSession,
    ref_space: XrReferenceSpace,
    // Keeps the context the base layer was created from alive.
    _gl: WebGl2RenderingContext,
}

impl WebXRApp {
    pub async fn new() -> Result<Self, JsValue> {
        printlog("Starting WebGL2 for WebXR");
        let gl = create_webgl_context()?;

        printlog("Starting WebXR...");
        let navigator = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .navigator();
        let xr = navigator.xr();
        let session_mode = XrSessionMode::ImmersiveVr;

        let supports_session = JsFuture::from(xr.is_session_supported(session_mode)).await?;
        if supports_session.as_bool() != Some(true) {
            return Err(JsValue::from_str("immersive-vr sessions are not supported"));
        }

        let session_init = XrSessionInit::new();
        let session: XrSession =
            JsFuture::from(xr.request_session_with_options(session_mode, &session_init)).await?.into();

        let xr_gl_layer = XrWebGlLayer::new_with_web_gl2_rendering_context(&session, &gl)?;
        let mut render_state_init = XrRenderStateInit::new();
        render_state_init.base_layer(Some(&xr_gl_layer));
        session.update_render_state_with_state(&render_state_init);

        let ref_space: XrReferenceSpace =
            JsFuture::from(session.request_reference_space(XrReferenceSpaceType::Local)).await?.into();

        Ok(Self { session, ref_space, _gl: gl })
    }

    pub fn start(&self, app: Rc<RefCell<App>>) {
        self.register_select(app.clone());

        let f = Rc::new(RefCell::new(None));
        let g = f.clone();
        let ref_space = self.ref_space.clone();
        // Squeeze state of each controller seen last frame.
        let mut known: HashMap<String, bool> = HashMap::new();

        *g.borrow_mut() = Some(Closure::new(move |_time: f64, frame: XrFrame| {
            let sess: XrSession = frame.session();
            let mut app = app.borrow_mut();

            if let Some(viewer_pose) = frame.get_viewer_pose(&ref_space) {
                let (pos, rot) = to_pose(&viewer_pose.transform());
                app.update_camera(pos, rot, None);
            }

            let sources = sess.input_sources();
            let mut seen = HashSet::new();
            for i in 0..sources.length() {
                let Some(source) = sources.get(i) else {
                    continue;
                };
                let id = controller_id(&source, i);
                if !known.contains_key(&id) {
                    app.controller_added(&id);
                }
                if let Some(grip) = source.grip_space() {
                    if let Some(pose) = frame.get_pose(&grip, &ref_space) {
                        let (pos, rot) = to_pose(&pose.transform());
                        app.update_controller_pose(&id, pos, rot);
                    }
                }
                let pressed = squeeze_pressed(&source);
                let was_pressed = known.insert(id.clone(), pressed).unwrap_or(false);
                app.squeeze(&id, pressed, pressed != was_pressed);
                seen.insert(id);
            }

            let gone: Vec<String> = known.keys().filter(|id| !seen.contains(*id)).cloned().collect();
            for id in gone {
                known.remove(&id);
                app.controller_removed(&id);
            }

            app.update_scene();

            // Schedule ourself for another requestAnimationFrame callback.
            if let Some(callback) = f.borrow().as_ref() {
                request_animation_frame(&sess, callback);
            }
        }));

        if let Some(callback) = g.borrow().as_ref() {
            request_animation_frame(&self.session, callback);
        }
    }

    // Trigger pulls become pointer-down rays along the controller's target ray.
    fn register_select(&self, app: Rc<RefCell<App>>) {
        let ref_space = self.ref_space.clone();
        let on_select = Closure::<dyn FnMut(XrInputSourceEvent)>::new(move |event: XrInputSourceEvent| {
            let frame = event.frame();
            let source = event.input_source();
            match frame.get_pose(&source.target_ray_space(), &ref_space) {
                Some(pose) => {
                    let (origin, rot) = to_pose(&pose.transform());
                    app.borrow_mut().pointer_down(origin, rot * -Vec3f::z());
                }
                None => debug!("select without a target ray pose"),
            }
        });
        self.session.set_onselectstart(Some(on_select.as_ref().unchecked_ref()));
        // Lives as long as the session.
        on_select.forget();
    }
}

pub async fn run_experience() {
    init_logging();
    printlog("running run_experience - starting");

    // Request the session before building the scene. Browsers reject session
    // requests that come too long after the user gesture.
    let xr_app = match WebXRApp::new().await {
        Ok(xr_app) => xr_app,
        Err(err) => {
            error!("WebXR session failed: {:?}", err);
            return;
        }
    };

    let app = match App::new(SceneConfig::default()) {
        Ok(app) => app,
        Err(err) => {
            error!("{:#}", err);
            return;
        }
    };
    printlog("running run_experience - created app");
    xr_app.start(Rc::new(RefCell::new(app)));
}
