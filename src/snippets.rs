use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::schedule::{ScheduleError, Scheduler};

/// How often the hero viewer moves to the next snippet.
pub const CYCLE_PERIOD: Duration = Duration::from_millis(4000);
/// Time between the exit animation starting and the content swap.
pub const SWAP_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    pub language: &'static str,
    pub display_name: &'static str,
    pub code: &'static str,
}

pub const SNIPPETS: [Snippet; 4] = [
    Snippet {
        language: "javascript",
        display_name: "JavaScript",
        code: r#"function createApp() {
  const app = express();
  app.use(cors());
  app.use(express.json());

  return app;
}"#,
    },
    Snippet {
        language: "jsx",
        display_name: "React",
        code: r#"function UserProfile({ user }) {
  return (
    <div className="profile">
      <h2>{user.name}</h2>
      <p>{user.bio}</p>
      <Button>View Projects</Button>
    </div>
  );
}"#,
    },
    Snippet {
        language: "javascript",
        display_name: "Node.js",
        code: r#"async function fetchData() {
  try {
    const response = await db.query(
      'SELECT * FROM projects WHERE user_id = $1',
      [userId]
    );
    return response.rows;
  } catch (err) {
    console.error('Database error:', err);
    throw new Error('Failed to fetch projects');
  }
}"#,
    },
    Snippet {
        language: "css",
        display_name: "CSS",
        code: r#".container {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  padding: 2rem;
  max-width: 1200px;
  margin: 0 auto;
}"#,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePhase {
    /// Nothing has happened since mount.
    #[default]
    Idle,
    Exiting,
    Entering,
}

impl CyclePhase {
    pub fn animation_class(self) -> &'static str {
        match self {
            CyclePhase::Idle => "",
            CyclePhase::Exiting => "animate-down",
            CyclePhase::Entering => "animate-up",
        }
    }
}

/// Visible snippet index plus the animation phase it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetCycle {
    index: usize,
    len: usize,
    phase: CyclePhase,
}

impl SnippetCycle {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            phase: CyclePhase::Idle,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn begin_exit(&mut self) {
        self.phase = CyclePhase::Exiting;
    }

    /// Move to the next snippet and start the enter animation.
    pub fn swap(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.phase = CyclePhase::Entering;
    }

    pub fn current<'a>(&self, snippets: &'a [Snippet]) -> Option<&'a Snippet> {
        snippets.get(self.index)
    }
}

/// Runs a [`SnippetCycle`] on a [`Scheduler`].
///
/// Every `CYCLE_PERIOD` the phase goes to exiting, and `SWAP_DELAY` later the
/// index advances. Each change is pushed through `on_change`. Once
/// [`CycleDriver::stop`] has been called (or the driver is dropped) no further
/// change is published, including a swap that was already scheduled.
pub struct CycleDriver<S: Scheduler> {
    scheduler: S,
    handle: Mutex<Option<S::Handle>>,
    alive: Arc<AtomicBool>,
    state: Arc<Mutex<SnippetCycle>>,
}

impl<S: Scheduler> CycleDriver<S> {
    pub fn start<F>(scheduler: S, len: usize, on_change: F) -> Result<Self, ScheduleError>
    where
        F: Fn(SnippetCycle) + Send + Sync + 'static,
    {
        let alive = Arc::new(AtomicBool::new(true));
        let state = Arc::new(Mutex::new(SnippetCycle::new(len)));
        let on_change: Arc<dyn Fn(SnippetCycle) + Send + Sync> = Arc::new(on_change);

        let tick = {
            let scheduler = scheduler.clone();
            let alive = alive.clone();
            let state = state.clone();
            move || {
                if !alive.load(Ordering::SeqCst) {
                    return;
                }
                on_change(update(&state, SnippetCycle::begin_exit));

                let swap = {
                    let alive = alive.clone();
                    let state = state.clone();
                    let on_change = on_change.clone();
                    move || {
                        if !alive.load(Ordering::SeqCst) {
                            return;
                        }
                        on_change(update(&state, SnippetCycle::swap));
                    }
                };
                if let Err(e) = scheduler.once(SWAP_DELAY, Box::new(swap)) {
                    log::warn!("{e}, swapping snippet without delay");
                    on_change(update(&state, SnippetCycle::swap));
                }
            }
        };

        let handle = scheduler.every(CYCLE_PERIOD, Box::new(tick))?;
        Ok(Self {
            scheduler,
            handle: Mutex::new(Some(handle)),
            alive,
            state,
        })
    }

    pub fn state(&self) -> SnippetCycle {
        *self.state.lock().expect("should be able to read snippet cycle")
    }

    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::SeqCst);
        let handle = self
            .handle
            .lock()
            .expect("should be able to take interval handle")
            .take();
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for CycleDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn update(state: &Mutex<SnippetCycle>, f: impl FnOnce(&mut SnippetCycle)) -> SnippetCycle {
    let mut cycle = state.lock().expect("should be able to update snippet cycle");
    f(&mut *cycle);
    *cycle
}
