//! Logo assembly
//!
//! Builds the four-fin logo against any [`LogoHost`]: one shared fin
//! geometry, four individually colored materials, each fin turned to its
//! role's angle, all gathered under a group turned a quarter-turn.
//!
//! The result is static. Spinning it is up to the caller, by mutating the
//! group's transform each frame.

use xrlogo_math::Euler;
use crate::fin::build_fin_shape;
use crate::host::{LogoHost, SceneNode};
use crate::palette::{FinRole, GROUP_ROTATION_Y};
use crate::params::LogoParams;
use crate::shading::logo_shader;
use crate::transform::Transform3D;

/// An animated-logo handle owning the assembled group
pub struct LogoSpinner<G> {
    /// The logo's root node; attach it to a scene and rotate it to spin
    pub logo_group: G,
}

impl<G: SceneNode> LogoSpinner<G> {
    /// Build the logo with the given host
    ///
    /// Host failures are returned as-is; nothing is retried.
    pub fn new<H>(host: &mut H, params: &LogoParams) -> Result<Self, H::Error>
    where
        H: LogoHost<Group = G>,
    {
        let mut logo_group = host.create_group();
        logo_group.transform_mut().rotation.y = GROUP_ROTATION_Y;

        let mut fin_shape = host.create_shape();
        build_fin_shape(params, &mut fin_shape);
        let fin_geometry = host.create_shape_geometry(&fin_shape)?;

        for role in FinRole::ALL {
            let material = host.create_shader_material(&logo_shader(params, role.palette().colors()))?;
            let mut fin_mesh = host.create_mesh(&fin_geometry, material)?;
            fin_mesh.transform_mut().set_rotation(Euler::from_y(role.angle()));
            host.add_to_group(&mut logo_group, fin_mesh);
            log::trace!("Added {} fin at {:.0}°", role.name(), role.angle().to_degrees());
        }

        log::debug!("Assembled logo with {} fins", FinRole::ALL.len());

        Ok(Self { logo_group })
    }

    /// Access the group's transform (for spinning)
    pub fn transform_mut(&mut self) -> &mut Transform3D {
        self.logo_group.transform_mut()
    }

    /// Consume the spinner and hand over the group
    pub fn into_group(self) -> G {
        self.logo_group
    }
}
