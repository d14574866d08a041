//! Sound cues through `bevy_kira_audio`.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioSource};
use std::collections::HashMap;

use crate::core::SoundRequest;
use crate::data::GameCatalog;

const MUSIC_CUE: &str = "main";
const MUSIC_VOLUME: f64 = 0.4;
const EFFECT_VOLUME: f64 = 0.6;

/// Loaded audio handles by cue name.
#[derive(Resource, Default)]
pub struct SoundLibrary {
    handles: HashMap<String, Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn get(&self, cue: &str) -> Option<&Handle<AudioSource>> {
        self.handles.get(cue)
    }
}

/// Start loading every cue listed in the catalog.
pub fn load_sounds(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    catalog: Res<GameCatalog>,
) {
    let handles = catalog
        .sounds
        .iter()
        .map(|(cue, path)| (cue.clone(), asset_server.load(path.clone())))
        .collect();
    commands.insert_resource(SoundLibrary { handles });
}

/// Background music, looped for as long as the level runs.
pub fn start_music(audio: Res<Audio>, library: Res<SoundLibrary>) {
    if let Some(music) = library.get(MUSIC_CUE) {
        audio.play(music.clone()).looped().with_volume(MUSIC_VOLUME);
    }
}

pub fn stop_music(audio: Res<Audio>) {
    audio.stop();
}

/// Play requested cues. Cues without a sound are ignored.
pub fn play_sound_requests(
    audio: Res<Audio>,
    library: Res<SoundLibrary>,
    mut requests: EventReader<SoundRequest>,
) {
    for request in requests.read() {
        match library.get(&request.cue) {
            Some(handle) => {
                audio.play(handle.clone()).with_volume(EFFECT_VOLUME);
            }
            None => debug!("No sound for cue '{}'", request.cue),
        }
    }
}
