use crate::{
    core::Seconds,
    ease::Ease,
    error::KeepsakeResult,
    schedule::{ElementId, Schedule},
    script::Script,
    timing::TimingConfig,
};

/// How one element becomes visible once its offset passes. These are
/// styling defaults for the presentation surface; the *offsets* always come
/// from the [`Schedule`], never from here.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct RevealSpec {
    pub duration: Seconds,
    pub ease: Ease,
    pub rise_px: f64,
    pub blur_px: f64,
}

fn reveal_for(timing: &TimingConfig, element: ElementId) -> RevealSpec {
    match element {
        ElementId::OpeningRule | ElementId::ClosingRule => RevealSpec {
            duration: Seconds(2.0),
            ease: Ease::InOutQuad,
            rise_px: 0.0,
            blur_px: 0.0,
        },
        ElementId::Message(_) => RevealSpec {
            duration: timing.fade,
            ease: Ease::OutQuad,
            rise_px: 20.0,
            blur_px: 5.0,
        },
        // The counter's own run is valued separately; its container fades
        // with the host line.
        ElementId::Counter => RevealSpec {
            duration: timing.fade,
            ease: Ease::OutQuad,
            rise_px: 0.0,
            blur_px: 0.0,
        },
        ElementId::PhaseDivider => RevealSpec {
            duration: Seconds(2.0),
            ease: Ease::OutCubic,
            rise_px: 0.0,
            blur_px: 0.0,
        },
        ElementId::WishPanel => RevealSpec {
            duration: Seconds(1.5),
            ease: Ease::OutQuad,
            rise_px: 20.0,
            blur_px: 0.0,
        },
        ElementId::Wish(_) => RevealSpec {
            duration: timing.fade,
            ease: Ease::InOutQuad,
            rise_px: 0.0,
            blur_px: 0.0,
        },
        ElementId::Footer => RevealSpec {
            duration: Seconds(2.0),
            ease: Ease::Linear,
            rise_px: 0.0,
            blur_px: 0.0,
        },
    }
}

/// One visible element at an instant: eased reveal progress plus the
/// residual rise/blur the surface should still apply.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ElementState {
    pub element: ElementId,
    pub offset: Seconds,
    pub progress: f64,
    pub opacity: f64,
    pub rise_px: f64,
    pub blur_px: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_value: Option<i64>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PresentationFrame {
    pub at: Seconds,
    pub intro_complete: bool,
    pub elements: Vec<ElementState>,
}

/// Resolve what the surface shows `at` seconds after activation. Elements
/// whose offset has not passed are absent; everything else carries its
/// reveal progress in [0,1]. Pure; schedule entries keep authored order.
#[tracing::instrument(skip(schedule, script, timing))]
pub fn eval_frame(
    schedule: &Schedule,
    script: &Script,
    timing: &TimingConfig,
    at: Seconds,
) -> KeepsakeResult<PresentationFrame> {
    let mut elements = Vec::new();

    for entry in &schedule.entries {
        if at < entry.offset {
            continue;
        }
        let spec = reveal_for(timing, entry.element);
        let elapsed = at - entry.offset;
        let progress = if spec.duration.is_zero() {
            1.0
        } else {
            spec.ease
                .apply(elapsed.as_f64() / spec.duration.as_f64())
                .clamp(0.0, 1.0)
        };

        let counter_value = match entry.element {
            ElementId::Counter => script.counter.as_ref().map(|c| c.value_at(elapsed)),
            _ => None,
        };

        elements.push(ElementState {
            element: entry.element,
            offset: entry.offset,
            progress,
            opacity: progress,
            rise_px: (1.0 - progress) * spec.rise_px,
            blur_px: (1.0 - progress) * spec.blur_px,
            counter_value,
        });
    }

    Ok(PresentationFrame {
        at,
        intro_complete: at >= schedule.total,
        elements,
    })
}
